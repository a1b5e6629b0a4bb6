//! Coherent noise methods backed by the `noise` crate generators.

use glam::Vec3;
use ::noise::NoiseFn;

use super::{NoiseMethod, SampleRange};
use crate::error::SurfaceError;

/// Largest scaled coordinate handed to the `noise` generators; they cast
/// lattice coordinates to `isize` and panic past that range
pub const SAMPLE_LIMIT: f32 = 1.0e15;

/// Spatial axes read by a noise method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimensions {
    /// x only
    One,
    /// x and y
    Two,
    /// x, y and z
    Three,
}

impl TryFrom<u8> for Dimensions {
    type Error = SurfaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Dimensions::One),
            2 => Ok(Dimensions::Two),
            3 => Ok(Dimensions::Three),
            other => Err(SurfaceError::UnsupportedDimensionality(other)),
        }
    }
}

impl From<Dimensions> for u8 {
    fn from(value: Dimensions) -> Self {
        match value {
            Dimensions::One => 1,
            Dimensions::Two => 2,
            Dimensions::Three => 3,
        }
    }
}

/// A `noise` crate generator restricted to 1, 2 or 3 axes
///
/// The crate has no 1D generators, so 1D samples the 2D generator along the
/// y = 0 line. Its generators are all signed; an `Unsigned` range remaps the
/// raw value into [0, 1] here so callers see the family's declared range.
pub struct CoherentNoise<G> {
    source: G,
    dimensions: Dimensions,
    range: SampleRange,
}

impl<G> CoherentNoise<G>
where
    G: NoiseFn<f64, 2> + NoiseFn<f64, 3>,
{
    pub fn new(source: G, dimensions: Dimensions, range: SampleRange) -> Self {
        Self {
            source,
            dimensions,
            range,
        }
    }

    fn raw(&self, p: Vec3) -> f64 {
        let (x, y, z) = (p.x as f64, p.y as f64, p.z as f64);
        match self.dimensions {
            Dimensions::One => NoiseFn::<f64, 2>::get(&self.source, [x, 0.0]),
            Dimensions::Two => NoiseFn::<f64, 2>::get(&self.source, [x, y]),
            Dimensions::Three => NoiseFn::<f64, 3>::get(&self.source, [x, y, z]),
        }
    }
}

impl<G> NoiseMethod for CoherentNoise<G>
where
    G: NoiseFn<f64, 2> + NoiseFn<f64, 3>,
{
    /// Out-of-range or non-finite scaled points sample as 0 (the signed
    /// midpoint)
    fn sample(&self, point: Vec3, frequency: f32) -> f32 {
        let scaled = point * frequency;
        let value = if scaled.is_finite() && scaled.abs().max_element() <= SAMPLE_LIMIT {
            self.raw(scaled) as f32
        } else {
            0.0
        };
        match self.range {
            SampleRange::Signed => value,
            SampleRange::Unsigned => (value * 0.5 + 0.5).clamp(0.0, 1.0),
        }
    }

    fn range(&self) -> SampleRange {
        self.range
    }
}
