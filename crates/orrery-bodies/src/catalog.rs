//! The fixed planet catalog and the index-driven property formulas.

use crate::color::PackedColor;

/// A static catalog entry: display name and base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanetSpec {
    /// Display name.
    pub name: &'static str,
    /// Base color used for both the body and its orbit outline.
    pub color: PackedColor,
}

impl PlanetSpec {
    const fn new(name: &'static str, color: u32) -> Self {
        Self {
            name,
            color: PackedColor(color),
        }
    }
}

/// The nine bodies, innermost first.
pub const CATALOG: [PlanetSpec; 9] = [
    PlanetSpec::new("Mercure", 0x3498DB),
    PlanetSpec::new("Vénus", 0xE67E22),
    PlanetSpec::new("Terre", 0x2ECC71),
    PlanetSpec::new("Mars", 0xE74C3C),
    PlanetSpec::new("Jupiter", 0xF1C40F),
    PlanetSpec::new("Saturne", 0x9B59B6),
    PlanetSpec::new("Uranus", 0x1ABC9C),
    PlanetSpec::new("Neptune", 0x34495E),
    PlanetSpec::new("Pluton", 0x9B59B6),
];

/// Number of catalog entries sized with the rocky-body formula.
const ROCKY_COUNT: usize = 4;

/// Numeric properties derived from a catalog index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetRuntimeProps {
    /// Sphere radius in scene units.
    pub size: f32,
    /// Distance from the origin to the orbit, in scene units.
    pub orbit_radius: f32,
    /// Angular speed in radians per unit time.
    pub orbit_speed: f32,
}

/// Derive size, orbit radius and orbit speed for the body at `index`.
///
/// The first four entries use the rocky sizing (`1.2 + 0.3·i`), the rest the
/// giant sizing (`2 + 0.4·(i − 4)`). Orbits are evenly spaced shells
/// `12 + 7·i` apart and speeds fall off as `0.5 / (i + 1)`.
pub fn planet_props(index: usize) -> PlanetRuntimeProps {
    let i = index as f32;
    let size = if index < ROCKY_COUNT {
        1.2 + i * 0.3
    } else {
        2.0 + (index - ROCKY_COUNT) as f32 * 0.4
    };
    PlanetRuntimeProps {
        size,
        orbit_radius: 12.0 + i * 7.0,
        orbit_speed: 0.5 / (i + 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_catalog_order() {
        assert_eq!(CATALOG.len(), 9);
        assert_eq!(CATALOG[0].name, "Mercure");
        assert_eq!(CATALOG[8].name, "Pluton");
    }

    #[test]
    fn test_orbit_radius_evenly_spaced() {
        for i in 0..CATALOG.len() {
            assert_eq!(planet_props(i).orbit_radius, 12.0 + 7.0 * i as f32);
        }
    }

    #[test]
    fn test_size_two_regimes() {
        for i in 0..CATALOG.len() {
            let expected = if i < 4 {
                1.2 + 0.3 * i as f32
            } else {
                2.0 + 0.4 * (i as f32 - 4.0)
            };
            let size = planet_props(i).size;
            assert!((size - expected).abs() < EPS, "index {i}: {size} vs {expected}");
        }
        // Jupiter is the first giant and starts above the largest rocky body.
        assert!(planet_props(4).size > planet_props(3).size);
    }

    #[test]
    fn test_orbit_speed_decreases_outward() {
        for i in 0..CATALOG.len() {
            let speed = planet_props(i).orbit_speed;
            assert!((speed - 0.5 / (i as f32 + 1.0)).abs() < EPS);
            if i > 0 {
                assert!(speed < planet_props(i - 1).orbit_speed);
            }
        }
    }

    #[test]
    fn test_earth_analog() {
        let props = planet_props(2);
        assert_eq!(CATALOG[2].name, "Terre");
        assert_eq!(CATALOG[2].color, PackedColor(0x2ECC71));
        assert!((props.size - 1.8).abs() < EPS);
        assert_eq!(props.orbit_radius, 26.0);
        assert!((props.orbit_speed - 0.166_666_67).abs() < EPS);
    }
}
