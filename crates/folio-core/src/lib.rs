//! Platform-independent half of the portfolio scenes: animation drivers,
//! layout rules, camera math and mesh data. Nothing here touches the DOM or
//! the GPU.

pub mod camera;
pub mod constants;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod patrol;
pub mod pointer;
pub mod rotator;
pub mod snow;
pub mod transform;

pub use camera::*;
pub use constants::*;
pub use easing::*;
pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use model::*;
pub use patrol::*;
pub use pointer::*;
pub use rotator::*;
pub use snow::*;
pub use transform::*;

/// Meshes for the three showcase sections, in section order.
pub fn showcase_meshes() -> [MeshData; SECTION_COUNT] {
    [
        sphere(1.0, 32, 32, OBJECT_COLORS[0]),
        cone(1.5, 2.0, 4, OBJECT_COLORS[1]),
        torus_knot(0.8, 0.35, 100, 16, 2, 3, OBJECT_COLORS[2]),
    ]
}
