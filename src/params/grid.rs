//! Grid topology parameters.

use crate::error::{Result, SurfaceError};

/// Largest resolution whose vertex indices still fit in `u32`
/// ((65534 + 1)² vertices)
pub const MAX_RESOLUTION: u32 = 65_534;

/// Grid topology parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Cells per side (1..=200 in interactive use, e.g. 10 = 121 vertices)
    pub resolution: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { resolution: 10 }
    }
}

impl GridConfig {
    pub fn new(resolution: u32) -> Self {
        Self { resolution }
    }

    /// Vertices in the grid: (resolution + 1)²
    pub fn vertex_count(&self) -> usize {
        let side = self.resolution as usize + 1;
        side * side
    }

    /// Triangle indices in the grid: 6 per cell
    pub fn index_count(&self) -> usize {
        let r = self.resolution as usize;
        r * r * 6
    }

    /// Reject resolutions the grid builder cannot step over
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(SurfaceError::invalid("resolution must be >= 1"));
        }
        if self.resolution > MAX_RESOLUTION {
            return Err(SurfaceError::invalid(format!(
                "resolution must be <= {}, got {}",
                MAX_RESOLUTION, self.resolution
            )));
        }
        Ok(())
    }
}
