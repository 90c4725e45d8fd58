//! Geometry builders: orbit outlines in the XZ plane and UV spheres for bodies.

use glam::{Vec2, Vec3};
use thiserror::Error;

/// Angular segments in an orbit outline. The outline has one more point so it closes.
pub const ORBIT_SEGMENTS: u32 = 64;

/// Longitude and latitude subdivisions of a body sphere.
pub const SPHERE_SEGMENTS: u32 = 24;

/// Rejected extents passed to the geometry builders.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// NaN or infinite extent.
    #[error("extent must be finite, got {0}")]
    NonFinite(f32),

    /// Extent below zero.
    #[error("extent must not be negative, got {0}")]
    Negative(f32),
}

/// Check that a radius or size is usable by the builders in this module.
///
/// The builders themselves never fail; callers feeding them values that did
/// not come from the catalog should run them through this first.
pub fn validate_extent(value: f32) -> Result<f32, GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite(value));
    }
    if value < 0.0 {
        return Err(GeometryError::Negative(value));
    }
    Ok(value)
}

/// Sample a circle of `radius` in the horizontal plane.
///
/// Returns `segments + 1` points starting at `+X` and winding towards `+Z`;
/// the last point coincides with the first so the polyline closes. At least
/// one segment is always produced.
pub fn orbit_outline_points(radius: f32, segments: u32) -> Vec<Vec3> {
    debug_assert!(validate_extent(radius).is_ok(), "bad orbit radius {radius}");
    let segments = segments.max(1);

    (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
            Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
        })
        .collect()
}

/// A latitude/longitude sphere centered on the origin.
#[derive(Clone, Debug)]
pub struct SphereGeometry {
    /// Sphere radius.
    pub radius: f32,
    /// Subdivisions around the Y axis.
    pub width_segments: u32,
    /// Subdivisions from pole to pole.
    pub height_segments: u32,
    /// Vertex positions, ring by ring from the north pole (`+Y`).
    pub positions: Vec<Vec3>,
    /// Unit normals, one per position.
    pub normals: Vec<Vec3>,
    /// Texture coordinates, `v = 1` at the north pole.
    pub uvs: Vec<Vec2>,
    /// Triangle list. Degenerate triangles at the poles are left out.
    pub indices: Vec<u32>,
}

impl SphereGeometry {
    /// Build a sphere with `(width_segments + 1) * (height_segments + 1)` vertices.
    ///
    /// Each ring repeats its first vertex at the seam so UVs wrap cleanly.
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        debug_assert!(validate_extent(radius).is_ok(), "bad sphere radius {radius}");
        let width_segments = width_segments.max(3);
        let height_segments = height_segments.max(2);

        let ring = (width_segments + 1) as usize;
        let vertex_count = ring * (height_segments + 1) as usize;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut normals = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);

        for iy in 0..=height_segments {
            let v = iy as f32 / height_segments as f32;

            // Pole vertices sit between their neighbours in U.
            let u_offset = if iy == 0 {
                0.5 / width_segments as f32
            } else if iy == height_segments {
                -0.5 / width_segments as f32
            } else {
                0.0
            };

            let (sin_theta, cos_theta) = (v * std::f32::consts::PI).sin_cos();
            for ix in 0..=width_segments {
                let u = ix as f32 / width_segments as f32;
                let (sin_phi, cos_phi) = (u * std::f32::consts::TAU).sin_cos();

                let position = Vec3::new(
                    -radius * cos_phi * sin_theta,
                    radius * cos_theta,
                    radius * sin_phi * sin_theta,
                );
                positions.push(position);
                normals.push(
                    Vec3::new(-cos_phi * sin_theta, cos_theta, sin_phi * sin_theta).normalize(),
                );
                uvs.push(Vec2::new(u + u_offset, 1.0 - v));
            }
        }

        let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);
        let at = |ix: u32, iy: u32| iy * (width_segments + 1) + ix;
        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = at(ix + 1, iy);
                let b = at(ix, iy);
                let c = at(ix, iy + 1);
                let d = at(ix + 1, iy + 1);

                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != height_segments - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self {
            radius,
            width_segments,
            height_segments,
            positions,
            normals,
            uvs,
            indices,
        }
    }

    /// Number of triangles in the index list.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
