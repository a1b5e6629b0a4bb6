//! Noise-colored grid surface: topology, coloring and refresh orchestration.

mod coloring;
mod mesh;
mod system;

use bytemuck::{Pod, Zeroable};

// Re-export public types
pub use coloring::{evaluate_colors, evaluate_colors_into, CornerPoints, SampleStats, MAX_EXTENT};
pub use mesh::{build_grid, GridMesh, GRID_NORMAL, MESH_NAME};
pub use system::{GridState, SurfaceCreator};

/// Interleaved vertex for GPU-style upload (position, normal, uv, color)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}
