//! Fractal noise parameters.

use crate::error::{Result, SurfaceError};
use crate::noise::{NoiseFamily, MAX_DIMENSIONS};

/// Most octaves a fractal sum may layer
pub const MAX_OCTAVES: u32 = 32;

/// Highest frequency any octave may sample at (cycles per world unit)
pub const MAX_FREQUENCY: f64 = 1.0e6;

/// Fractal noise parameters
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseConfig {
    /// Base spatial frequency (cycles per world unit, must be > 0)
    pub frequency: f32,

    /// Number of layered octaves (>= 1, 1..=8 in interactive use)
    pub octaves: u32,

    /// Frequency multiplier per octave (1..=4 in interactive use)
    pub lacunarity: f32,

    /// Amplitude multiplier per octave (0..=1 in interactive use)
    pub persistence: f32,

    /// Spatial axes the noise reads (1 = x, 2 = xy, 3 = xyz)
    pub dimensions: u8,

    /// Noise algorithm family
    pub family: NoiseFamily,

    /// Seed for the lattice permutation tables
    pub seed: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            octaves: 1,
            lacunarity: 2.0,
            persistence: 0.5,
            dimensions: 3,
            family: NoiseFamily::Value,
            seed: 0,
        }
    }
}

impl NoiseConfig {
    /// Validate configuration (positive frequency, at least one octave, etc.)
    pub fn validate(&self) -> Result<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(SurfaceError::invalid(format!(
                "frequency must be a finite value > 0, got {}",
                self.frequency
            )));
        }
        if self.octaves == 0 || self.octaves > MAX_OCTAVES {
            return Err(SurfaceError::invalid(format!(
                "octaves must be in 1..={}, got {}",
                MAX_OCTAVES, self.octaves
            )));
        }
        if !self.lacunarity.is_finite() || self.lacunarity <= 0.0 {
            return Err(SurfaceError::invalid(format!(
                "lacunarity must be a finite value > 0, got {}",
                self.lacunarity
            )));
        }
        if !self.persistence.is_finite() || self.persistence < 0.0 {
            return Err(SurfaceError::invalid(format!(
                "persistence must be a finite value >= 0, got {}",
                self.persistence
            )));
        }
        let top = self.top_frequency();
        if !top.is_finite() || top > MAX_FREQUENCY {
            return Err(SurfaceError::invalid(format!(
                "octave frequencies must stay <= {}, highest is {}",
                MAX_FREQUENCY, top
            )));
        }
        if self.dimensions == 0 || self.dimensions > MAX_DIMENSIONS {
            return Err(SurfaceError::UnsupportedDimensionality(self.dimensions));
        }
        Ok(())
    }

    /// Highest frequency sampled by any octave
    pub fn top_frequency(&self) -> f64 {
        let frequency = self.frequency as f64;
        let steps = self.octaves.saturating_sub(1) as i32;
        let last = frequency * (self.lacunarity as f64).powi(steps);
        frequency.max(last)
    }
}
