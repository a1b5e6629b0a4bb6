//! Planar grid mesh centered on the origin.

use glam::{Vec2, Vec3};

use crate::error::Result;
use crate::params::GridConfig;

/// Name given to every generated grid
pub const MESH_NAME: &str = "Surface Mesh";

/// Default normal: the grid faces -Z
pub const GRID_NORMAL: Vec3 = Vec3::NEG_Z;

/// Unit-square grid mesh spanning [-0.5, 0.5] in x and y
///
/// Vertices are row-major, y outer and x inner, so vertex (x, y) lives at
/// `y * (resolution + 1) + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMesh {
    pub name: &'static str,
    pub resolution: u32,
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl GridMesh {
    /// Build the grid topology for an already validated resolution
    pub(crate) fn new(resolution: u32) -> Self {
        debug_assert!(resolution >= 1, "grid resolution must be >= 1");

        let side = resolution as usize + 1;
        // x / resolution puts the outer rows and columns exactly on +-0.5
        let scale = resolution as f32;

        let mut vertices = Vec::with_capacity(side * side);
        let mut uvs = Vec::with_capacity(side * side);
        for y in 0..=resolution {
            for x in 0..=resolution {
                let u = x as f32 / scale;
                let v = y as f32 / scale;
                vertices.push(Vec3::new(u - 0.5, v - 0.5, 0.0));
                uvs.push(Vec2::new(u, v));
            }
        }
        let normals = vec![GRID_NORMAL; vertices.len()];

        // Two triangles per cell. The cursor skips the last vertex of each
        // row since it has no cell to its right.
        let r = resolution;
        let mut indices = Vec::with_capacity(r as usize * r as usize * 6);
        let mut v = 0u32;
        for _y in 0..r {
            for _x in 0..r {
                indices.extend_from_slice(&[v, v + r + 1, v + 1, v + 1, v + r + 1, v + r + 2]);
                v += 1;
            }
            v += 1;
        }

        Self {
            name: MESH_NAME,
            resolution,
            vertices,
            normals,
            uvs,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Build the grid topology for `resolution` cells per side
///
/// Fails for 0 and for resolutions whose vertex indices would overflow `u32`.
pub fn build_grid(resolution: u32) -> Result<GridMesh> {
    GridConfig::new(resolution).validate()?;
    Ok(GridMesh::new(resolution))
}
