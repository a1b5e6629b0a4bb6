//! Validated surface configuration (grid + noise + coloring).

use super::{GridConfig, NoiseConfig};
use crate::error::Result;
use crate::gradient::Gradient;

/// Complete, validated surface configuration
///
/// Built once through [`SurfaceConfig::new`]; fields are read-only afterwards
/// so a value of this type is always safe to hand to the grid builder and the
/// color evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    grid: GridConfig,
    noise: NoiseConfig,
    coloring: Gradient,
}

impl SurfaceConfig {
    pub fn new(grid: GridConfig, noise: NoiseConfig, coloring: Gradient) -> Result<Self> {
        grid.validate()?;
        noise.validate()?;
        Ok(Self {
            grid,
            noise,
            coloring,
        })
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn resolution(&self) -> u32 {
        self.grid.resolution
    }

    pub fn noise(&self) -> &NoiseConfig {
        &self.noise
    }

    pub fn coloring(&self) -> &Gradient {
        &self.coloring
    }

    /// Copy with different noise parameters, re-validated
    pub fn with_noise(&self, noise: NoiseConfig) -> Result<Self> {
        Self::new(self.grid, noise, self.coloring.clone())
    }

    /// Copy with a different resolution, re-validated
    pub fn with_resolution(&self, resolution: u32) -> Result<Self> {
        Self::new(
            GridConfig::new(resolution),
            self.noise.clone(),
            self.coloring.clone(),
        )
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            noise: NoiseConfig::default(),
            coloring: Gradient::default(),
        }
    }
}
