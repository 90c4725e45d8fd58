//! Catalog assembly: one [`Planet`] per catalog entry, in catalog order.

use glam::Vec3;
use rand::Rng;

use crate::catalog::{CATALOG, PlanetRuntimeProps, planet_props};
use crate::color::PackedColor;
use crate::renderable::{BodyMesh, MeshFactory, OrbitLine, RenderableFactory};

/// A generated planet with its renderables.
///
/// `L` and `B` are the orbit line and body types of the factory that built it.
/// The planet is handed over as-is; adding the renderables to a scene and
/// advancing `angle` each frame is up to the caller.
#[derive(Clone, Debug)]
pub struct Planet<L, B> {
    pub name: &'static str,
    pub color: PackedColor,
    /// Sphere radius.
    pub size: f32,
    pub orbit_radius: f32,
    /// Radians per unit time.
    pub orbit_speed: f32,
    /// Initial angle along the orbit, in `[0, 2π)`.
    pub angle: f32,
    pub orbit_line: L,
    pub body: B,
    /// Initial position: on the orbit at `angle`, with `y = 0`.
    pub position: Vec3,
}

/// A planet built by [`MeshFactory`].
pub type MeshPlanet = Planet<OrbitLine, BodyMesh>;

impl<L, B> Planet<L, B> {
    /// The derived numeric properties of this planet.
    pub fn props(&self) -> PlanetRuntimeProps {
        PlanetRuntimeProps {
            size: self.size,
            orbit_radius: self.orbit_radius,
            orbit_speed: self.orbit_speed,
        }
    }
}

/// Position on a circular orbit of `radius` in the XZ plane at `angle` radians.
pub fn orbit_position(radius: f32, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(cos * radius, 0.0, sin * radius)
}

/// Generate every catalog planet, innermost first.
///
/// Each planet's starting angle is drawn uniformly from `[0, 2π)` using `rng`;
/// all other fields depend only on the catalog index. Pass a seeded generator
/// for reproducible layouts.
pub fn generate_planets<R, F>(
    rng: &mut R,
    factory: &mut F,
) -> Vec<Planet<F::OrbitLine, F::BodyMesh>>
where
    R: Rng + ?Sized,
    F: RenderableFactory,
{
    let planets: Vec<_> = CATALOG
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let PlanetRuntimeProps {
                size,
                orbit_radius,
                orbit_speed,
            } = planet_props(index);

            let orbit_line = factory.build_orbit_line(orbit_radius, spec.color);
            let body = factory.build_body_mesh(size, spec.color);
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let position = orbit_position(orbit_radius, angle);

            log::debug!(
                "Generated {} (size={size:.2}, orbit={orbit_radius:.1}, speed={orbit_speed:.4}, angle={angle:.3})",
                spec.name
            );

            Planet {
                name: spec.name,
                color: spec.color,
                size,
                orbit_radius,
                orbit_speed,
                angle,
                orbit_line,
                body,
                position,
            }
        })
        .collect();

    log::info!("Generated {} planets", planets.len());
    planets
}

/// Generate every catalog planet with the built-in [`MeshFactory`].
pub fn generate_default_planets<R: Rng + ?Sized>(rng: &mut R) -> Vec<MeshPlanet> {
    generate_planets(rng, &mut MeshFactory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded(seed: u64) -> Vec<MeshPlanet> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_default_planets(&mut rng)
    }

    #[test]
    fn test_catalog_length_and_order() {
        let planets = seeded(1);
        assert_eq!(planets.len(), 9);
        assert_eq!(planets[0].name, "Mercure");
        assert_eq!(planets[8].name, "Pluton");
        for (planet, spec) in planets.iter().zip(CATALOG.iter()) {
            assert_eq!(planet.name, spec.name);
            assert_eq!(planet.color, spec.color);
        }
    }

    #[test]
    fn test_initial_position_on_orbit() {
        for planet in seeded(7) {
            let p = planet.position;
            assert_eq!(p.y, 0.0);
            let r2 = p.x * p.x + p.z * p.z;
            let expected = planet.orbit_radius * planet.orbit_radius;
            assert!(
                (r2 - expected).abs() < expected * 1e-5,
                "{}: r²={r2} expected {expected}",
                planet.name
            );
        }
    }

    #[test]
    fn test_angles_in_range() {
        for seed in 0..32 {
            for planet in seeded(seed) {
                assert!(
                    (0.0..std::f32::consts::TAU).contains(&planet.angle),
                    "angle {} out of range",
                    planet.angle
                );
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = seeded(42);
        let b = seeded(42);
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.angle, pb.angle);
            assert_eq!(pa.position, pb.position);
        }
    }

    #[test]
    fn test_deterministic_fields_across_invocations() {
        let a = seeded(1);
        let b = seeded(2);
        assert!(a.iter().zip(&b).any(|(pa, pb)| pa.angle != pb.angle));
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.name, pb.name);
            assert_eq!(pa.color, pb.color);
            assert_eq!(pa.props(), pb.props());
        }
    }

    #[test]
    fn test_props_match_index_formulas() {
        for (index, planet) in seeded(3).iter().enumerate() {
            assert_eq!(planet.props(), planet_props(index));
        }
    }

    #[test]
    fn test_renderables_follow_planet() {
        for planet in seeded(5) {
            assert_eq!(planet.orbit_line.points.len(), 65);
            assert_eq!(planet.orbit_line.material.color, planet.color);
            let first = planet.orbit_line.points[0];
            assert!((first.x - planet.orbit_radius).abs() < 1e-4);
            assert_eq!(planet.body.geometry.radius, planet.size);
            assert_eq!(planet.body.material.color, planet.color);
        }
    }

    #[test]
    fn test_earth_analog_record() {
        let earth = &seeded(9)[2];
        assert_eq!(earth.name, "Terre");
        assert_eq!(earth.color, PackedColor(0x2ECC71));
        assert!((earth.size - 1.8).abs() < 1e-5);
        assert_eq!(earth.orbit_radius, 26.0);
        assert!((earth.orbit_speed - 0.5 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_position_quadrants() {
        let p = orbit_position(10.0, 0.0);
        assert_eq!(p, Vec3::new(10.0, 0.0, 0.0));
        let q = orbit_position(10.0, std::f32::consts::FRAC_PI_2);
        assert!(q.x.abs() < 1e-5 && (q.z - 10.0).abs() < 1e-5 && q.y == 0.0);
    }

    #[test]
    fn test_process_rng_works() {
        let mut rng = rand::rng();
        let planets = generate_default_planets(&mut rng);
        assert_eq!(planets.len(), CATALOG.len());
    }
}
