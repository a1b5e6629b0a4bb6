//! Fractal (multi-octave) noise sums.

use glam::Vec3;

use super::NoiseMethod;

/// Sum `octaves` layers of `method`, normalized by the total amplitude
///
/// Octave 0 samples at `frequency` with amplitude 1. Each further octave
/// multiplies frequency by `lacunarity` and amplitude by `persistence`. The
/// result stays in the method's native range regardless of octave count.
/// `octaves` must be at least 1.
pub(crate) fn fractal_sum<M: NoiseMethod + ?Sized>(
    method: &M,
    point: Vec3,
    frequency: f32,
    octaves: u32,
    lacunarity: f32,
    persistence: f32,
) -> f32 {
    debug_assert!(octaves >= 1, "fractal sum needs at least one octave");

    let mut sum = method.sample(point, frequency);
    let mut frequency = frequency;
    let mut amplitude = 1.0;
    for _ in 1..octaves {
        frequency *= lacunarity;
        amplitude *= persistence;
        sum += method.sample(point, frequency) * amplitude;
    }
    sum / amplitude_range(octaves, persistence)
}

/// Total amplitude of `octaves` layers: 1 + p + p² + ... + p^(octaves-1)
pub fn amplitude_range(octaves: u32, persistence: f32) -> f32 {
    let mut amplitude = 1.0;
    let mut range = 1.0;
    for _ in 1..octaves {
        amplitude *= persistence;
        range += amplitude;
    }
    range
}
