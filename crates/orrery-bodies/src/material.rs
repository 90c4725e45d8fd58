//! Material descriptions attached to orbit outlines and body meshes.

use serde::{Deserialize, Serialize};

use crate::color::PackedColor;

/// Opacity of every orbit outline.
pub(crate) const ORBIT_OPACITY: f32 = 0.5;

/// Unlit line material for orbit outlines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineMaterial {
    /// Line color.
    pub color: PackedColor,
    /// Whether the line is alpha-blended.
    pub transparent: bool,
    /// Opacity in `[0.0, 1.0]`. Only meaningful when `transparent` is set.
    pub opacity: f32,
}

impl LineMaterial {
    /// The half-transparent material used for orbit outlines.
    pub fn orbit(color: PackedColor) -> Self {
        Self {
            color,
            transparent: true,
            opacity: ORBIT_OPACITY,
        }
    }
}

/// Diffuse (Lambertian) surface material for planet bodies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LambertMaterial {
    /// Diffuse color.
    pub color: PackedColor,
    /// Emitted color; black means the surface is lit only by the scene.
    pub emissive: PackedColor,
}

impl LambertMaterial {
    /// A non-emissive diffuse material of the given color.
    pub fn diffuse(color: PackedColor) -> Self {
        Self {
            color,
            emissive: PackedColor::BLACK,
        }
    }

    /// Returns `true` if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emissive != PackedColor::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_line_is_half_transparent() {
        let mat = LineMaterial::orbit(PackedColor(0xE74C3C));
        assert!(mat.transparent);
        assert_eq!(mat.opacity, 0.5);
        assert_eq!(mat.color, PackedColor(0xE74C3C));
    }

    #[test]
    fn test_diffuse_is_not_emissive() {
        let mat = LambertMaterial::diffuse(PackedColor(0xF1C40F));
        assert!(!mat.is_emissive());
        assert_eq!(mat.emissive, PackedColor::BLACK);
    }

    #[test]
    fn test_emissive_detected() {
        let mat = LambertMaterial {
            color: PackedColor(0xFFFFFF),
            emissive: PackedColor(0x110000),
        };
        assert!(mat.is_emissive());
    }

    #[test]
    fn test_line_material_serde_roundtrip() {
        let mat = LineMaterial::orbit(PackedColor(0x34495E));
        let json = serde_json::to_string(&mat).unwrap();
        assert!(json.contains("\"opacity\":0.5"));
        assert!(json.contains("\"transparent\":true"));
        let back: LineMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mat);
    }

    #[test]
    fn test_lambert_material_serde_roundtrip() {
        let mat = LambertMaterial::diffuse(PackedColor(0x9B59B6));
        let json = serde_json::to_string(&mat).unwrap();
        let back: LambertMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mat);
        assert!(!back.is_emissive());
    }
}
