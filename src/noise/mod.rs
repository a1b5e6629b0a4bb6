//! Noise sampling contract and the built-in coherent noise families.
//!
//! The surface evaluator only sees [`NoiseMethod`]: "sample scalar noise at a
//! 3D point with a given frequency". Concrete families wrap the `noise` crate
//! generators; tests substitute their own deterministic methods.

mod fractal;
mod methods;

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::error::{Result, SurfaceError};

pub use fractal::amplitude_range;
pub(crate) use fractal::fractal_sum;
pub use methods::{CoherentNoise, Dimensions, SAMPLE_LIMIT};

/// Highest number of spatial axes any family can read
pub const MAX_DIMENSIONS: u8 = 3;

/// Native output range of a noise method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRange {
    /// Centered on zero, roughly [-1, 1]
    Signed,
    /// Already in [0, 1]
    Unsigned,
}

impl SampleRange {
    /// Map a (fractal) sample of this range into [0, 1] for gradient lookup
    pub fn normalize(self, sample: f32) -> f32 {
        match self {
            SampleRange::Signed => sample * 0.5 + 0.5,
            SampleRange::Unsigned => sample,
        }
    }
}

/// Scalar noise evaluated at a 3D point
pub trait NoiseMethod {
    /// Sample at `point * frequency`
    fn sample(&self, point: Vec3, frequency: f32) -> f32;

    /// Native output range of [`NoiseMethod::sample`]
    fn range(&self) -> SampleRange;
}

impl<T: NoiseMethod + ?Sized> NoiseMethod for Box<T> {
    fn sample(&self, point: Vec3, frequency: f32) -> f32 {
        (**self).sample(point, frequency)
    }

    fn range(&self) -> SampleRange {
        (**self).range()
    }
}

/// Built-in noise algorithm families
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NoiseFamily {
    /// Interpolated random lattice values, unsigned
    #[default]
    Value,
    /// Gradient lattice noise, signed
    Perlin,
    /// OpenSimplex gradient noise, signed
    Simplex,
}

impl NoiseFamily {
    pub const ALL: [NoiseFamily; 3] = [NoiseFamily::Value, NoiseFamily::Perlin, NoiseFamily::Simplex];

    pub fn name(self) -> &'static str {
        match self {
            NoiseFamily::Value => "value",
            NoiseFamily::Perlin => "perlin",
            NoiseFamily::Simplex => "simplex",
        }
    }

    pub fn range(self) -> SampleRange {
        match self {
            NoiseFamily::Value => SampleRange::Unsigned,
            NoiseFamily::Perlin | NoiseFamily::Simplex => SampleRange::Signed,
        }
    }

    /// Build the sampler for this family at the given dimensionality
    pub fn method(self, dimensions: u8, seed: u32) -> Result<Box<dyn NoiseMethod>> {
        let dimensions = Dimensions::try_from(dimensions)?;
        let method: Box<dyn NoiseMethod> = match self {
            NoiseFamily::Value => Box::new(CoherentNoise::new(
                ::noise::Value::new(seed),
                dimensions,
                self.range(),
            )),
            NoiseFamily::Perlin => Box::new(CoherentNoise::new(
                ::noise::Perlin::new(seed),
                dimensions,
                self.range(),
            )),
            NoiseFamily::Simplex => Box::new(CoherentNoise::new(
                ::noise::OpenSimplex::new(seed),
                dimensions,
                self.range(),
            )),
        };
        Ok(method)
    }
}

impl fmt::Display for NoiseFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoiseFamily {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        NoiseFamily::ALL
            .into_iter()
            .find(|family| family.name() == lower)
            .ok_or_else(|| {
                let names: Vec<_> = NoiseFamily::ALL.iter().map(|f| f.name()).collect();
                SurfaceError::invalid(format!(
                    "unknown noise family '{}'. Supported: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}
