//! The renderable factory seam and its built-in CPU-side implementation.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::color::PackedColor;
use crate::geometry::{ORBIT_SEGMENTS, SPHERE_SEGMENTS, SphereGeometry, orbit_outline_points};
use crate::material::{LambertMaterial, LineMaterial};

/// Builds the two renderables each planet needs.
///
/// Implement this over a graphics backend to get backend-native objects out of
/// [`generate_planets`](crate::generate_planets). Inputs are always finite and
/// non-negative when they come from the catalog.
pub trait RenderableFactory {
    /// Closed line approximating the orbit circle.
    type OrbitLine;
    /// Sphere mesh for the planet body.
    type BodyMesh;

    /// Build a closed outline of `radius` in the horizontal plane.
    fn build_orbit_line(&mut self, radius: f32, color: PackedColor) -> Self::OrbitLine;

    /// Build a sphere of radius `size` with a diffuse material.
    fn build_body_mesh(&mut self, size: f32, color: PackedColor) -> Self::BodyMesh;
}

/// An orbit outline: a closed polyline plus its line material.
#[derive(Clone, Debug)]
pub struct OrbitLine {
    /// `ORBIT_SEGMENTS + 1` points, first and last coincident.
    pub points: Vec<Vec3>,
    /// Half-transparent line material.
    pub material: LineMaterial,
}

/// A planet body: sphere geometry plus a diffuse material.
#[derive(Clone, Debug)]
pub struct BodyMesh {
    pub geometry: SphereGeometry,
    pub material: LambertMaterial,
}

/// Interleaved vertex for uploading a [`BodyMesh`] to the GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BodyVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl BodyMesh {
    /// Interleave positions, normals and UVs into one vertex array.
    pub fn vertices(&self) -> Vec<BodyVertex> {
        let g = &self.geometry;
        g.positions
            .iter()
            .zip(&g.normals)
            .zip(&g.uvs)
            .map(|((p, n), uv)| BodyVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }

    /// Raw bytes of [`Self::vertices`], ready for a vertex buffer.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }
}

/// Factory producing plain [`OrbitLine`] and [`BodyMesh`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeshFactory;

impl RenderableFactory for MeshFactory {
    type OrbitLine = OrbitLine;
    type BodyMesh = BodyMesh;

    fn build_orbit_line(&mut self, radius: f32, color: PackedColor) -> OrbitLine {
        OrbitLine {
            points: orbit_outline_points(radius, ORBIT_SEGMENTS),
            material: LineMaterial::orbit(color),
        }
    }

    fn build_body_mesh(&mut self, size: f32, color: PackedColor) -> BodyMesh {
        BodyMesh {
            geometry: SphereGeometry::new(size, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            material: LambertMaterial::diffuse(color),
        }
    }
}
