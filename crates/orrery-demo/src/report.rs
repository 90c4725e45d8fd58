//! Printable summaries of a generated catalog.

use std::fmt::Write as _;

use orrery_bodies::{LambertMaterial, LineMaterial, MeshPlanet, PackedColor};
use serde::Serialize;

/// Flat, serializable view of one planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetSummary {
    pub name: String,
    /// Packed `0xRRGGBB`, serialized as a plain integer.
    pub color: PackedColor,
    pub size: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
    pub angle: f32,
    pub position: [f32; 3],
    pub outline_points: usize,
    pub line_material: LineMaterial,
    pub body_triangles: usize,
    pub body_material: LambertMaterial,
}

impl From<&MeshPlanet> for PlanetSummary {
    fn from(planet: &MeshPlanet) -> Self {
        Self {
            name: planet.name.to_string(),
            color: planet.color,
            size: planet.size,
            orbit_radius: planet.orbit_radius,
            orbit_speed: planet.orbit_speed,
            angle: planet.angle,
            position: planet.position.to_array(),
            outline_points: planet.orbit_line.points.len(),
            line_material: planet.orbit_line.material,
            body_triangles: planet.body.geometry.triangle_count(),
            body_material: planet.body.material,
        }
    }
}

/// One aligned line per planet.
pub fn render_text(planets: &[MeshPlanet]) -> String {
    let mut out = String::new();
    for (index, planet) in planets.iter().enumerate() {
        let p = planet.position;
        // Writing to a String never fails.
        let _ = writeln!(
            out,
            "{index} {:<8} {} size={:.2} orbit={:>4.1} speed={:.4} angle={:.3} pos=({:.2}, {:.2}, {:.2})",
            planet.name,
            planet.color,
            planet.size,
            planet.orbit_radius,
            planet.orbit_speed,
            planet.angle,
            p.x,
            p.y,
            p.z,
        );
    }
    out
}

/// Pretty-printed JSON array of [`PlanetSummary`].
pub fn render_json(planets: &[MeshPlanet]) -> Result<String, serde_json::Error> {
    let summaries: Vec<PlanetSummary> = planets.iter().map(PlanetSummary::from).collect();
    serde_json::to_string_pretty(&summaries)
}
