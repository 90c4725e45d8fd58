//! Procedural orbiting-body catalog: a fixed list of named planets, each with
//! derived size, orbit radius and angular speed, an orbit outline and a sphere
//! body ready to hand to a scene.
//!
//! Renderables are built through a [`RenderableFactory`] so the derivation logic
//! stays independent of any graphics backend. [`MeshFactory`] is the built-in
//! CPU-side implementation. Nothing here attaches objects to a scene or advances
//! orbits over time; callers own the returned planets entirely.

mod catalog;
mod color;
mod geometry;
mod material;
mod planet;
mod renderable;

pub use catalog::{CATALOG, PlanetRuntimeProps, PlanetSpec, planet_props};
pub use color::PackedColor;
pub use geometry::{
    GeometryError, ORBIT_SEGMENTS, SPHERE_SEGMENTS, SphereGeometry, orbit_outline_points,
    validate_extent,
};
pub use material::{LambertMaterial, LineMaterial};
pub use planet::{MeshPlanet, Planet, generate_default_planets, generate_planets, orbit_position};
pub use renderable::{BodyMesh, BodyVertex, MeshFactory, OrbitLine, RenderableFactory};
