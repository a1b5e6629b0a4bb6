//! Per-vertex coloring from a fractal noise field sampled in world space.

use glam::{Affine3A, Mat4, Vec3};

use crate::error::{Result, SurfaceError};
use crate::gradient::{Color, Gradient};
use crate::noise::{fractal_sum, NoiseMethod};
use crate::params::{GridConfig, NoiseConfig};

/// Largest world coordinate a grid corner may be placed at
pub const MAX_EXTENT: f32 = 1.0e6;

/// World-space images of the grid's four local corners
///
/// `p00`, `p10`, `p01`, `p11` correspond to local (-0.5, -0.5), (0.5, -0.5),
/// (-0.5, 0.5) and (0.5, 0.5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPoints {
    pub p00: Vec3,
    pub p10: Vec3,
    pub p01: Vec3,
    pub p11: Vec3,
}

impl CornerPoints {
    pub const LOCAL: CornerPoints = CornerPoints {
        p00: Vec3::new(-0.5, -0.5, 0.0),
        p10: Vec3::new(0.5, -0.5, 0.0),
        p01: Vec3::new(-0.5, 0.5, 0.0),
        p11: Vec3::new(0.5, 0.5, 0.0),
    };

    /// Map the local corners through an affine transform
    pub fn from_transform(transform: &Affine3A) -> Self {
        Self::map(|p| transform.transform_point3(p))
    }

    /// Map the local corners through a model matrix
    pub fn from_matrix(matrix: &Mat4) -> Self {
        Self::map(|p| matrix.transform_point3(p))
    }

    fn map(f: impl Fn(Vec3) -> Vec3) -> Self {
        let local = Self::LOCAL;
        Self {
            p00: f(local.p00),
            p10: f(local.p10),
            p01: f(local.p01),
            p11: f(local.p11),
        }
    }

    /// Every corner must be finite and within [`MAX_EXTENT`] of the origin
    /// on each axis
    pub fn validate(&self) -> Result<()> {
        for corner in [self.p00, self.p10, self.p01, self.p11] {
            if !corner.is_finite() || corner.abs().max_element() > MAX_EXTENT {
                return Err(SurfaceError::invalid(format!(
                    "transformed grid corner {} must be finite and within {} of the origin",
                    corner, MAX_EXTENT
                )));
            }
        }
        Ok(())
    }

    /// World position of normalized grid coordinate (u, v) in [0, 1]²
    ///
    /// Lerps along y on both sides first, then along x between the two row
    /// endpoints. For an affine map this equals transforming the local vertex.
    pub fn interpolate(&self, u: f32, v: f32) -> Vec3 {
        let row0 = self.p00.lerp(self.p01, v);
        let row1 = self.p10.lerp(self.p11, v);
        row0.lerp(row1, u)
    }
}

impl Default for CornerPoints {
    fn default() -> Self {
        Self::LOCAL
    }
}

/// Running statistics of the normalized samples behind a coloring pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub count: usize,
    pub min: f32,
    pub max: f32,
    sum: f64,
}

impl SampleStats {
    fn push(&mut self, value: f32) {
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value as f64;
    }

    /// Mean sample, 0 when nothing was sampled
    pub fn mean(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            (self.sum / self.count as f64) as f32
        }
    }
}

impl Default for SampleStats {
    fn default() -> Self {
        Self {
            count: 0,
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
            sum: 0.0,
        }
    }
}

/// World sample point of every grid vertex, in vertex buffer order
pub(crate) fn sample_points(
    resolution: u32,
    corners: &CornerPoints,
) -> impl Iterator<Item = Vec3> + '_ {
    let scale = resolution as f32;
    (0..=resolution).flat_map(move |y| {
        (0..=resolution).map(move |x| corners.interpolate(x as f32 / scale, y as f32 / scale))
    })
}

/// Fractal sample at `point`, normalized into [0, 1] for the method's range
pub(crate) fn normalized_sample<M: NoiseMethod + ?Sized>(
    method: &M,
    point: Vec3,
    noise: &NoiseConfig,
) -> f32 {
    let sample = fractal_sum(
        method,
        point,
        noise.frequency,
        noise.octaves,
        noise.lacunarity,
        noise.persistence,
    );
    method.range().normalize(sample)
}

/// Overwrite `colors` (one per grid vertex) with gradient-mapped noise
///
/// Returns the statistics of the normalized samples gathered in the same pass.
pub fn evaluate_colors_into<M: NoiseMethod + ?Sized>(
    colors: &mut [Color],
    resolution: u32,
    corners: &CornerPoints,
    noise: &NoiseConfig,
    method: &M,
    gradient: &Gradient,
) -> Result<SampleStats> {
    let grid = GridConfig::new(resolution);
    grid.validate()?;
    noise.validate()?;
    corners.validate()?;
    if colors.len() != grid.vertex_count() {
        return Err(SurfaceError::invalid(format!(
            "color buffer holds {} entries, grid of resolution {} has {} vertices",
            colors.len(),
            resolution,
            grid.vertex_count()
        )));
    }

    let mut stats = SampleStats::default();
    for (color, point) in colors.iter_mut().zip(sample_points(resolution, corners)) {
        let sample = normalized_sample(method, point, noise);
        stats.push(sample);
        *color = gradient.evaluate(sample);
    }
    Ok(stats)
}

/// One gradient-mapped noise color per grid vertex
pub fn evaluate_colors<M: NoiseMethod + ?Sized>(
    resolution: u32,
    corners: &CornerPoints,
    noise: &NoiseConfig,
    method: &M,
    gradient: &Gradient,
) -> Result<Vec<Color>> {
    let grid = GridConfig::new(resolution);
    grid.validate()?;
    let mut colors = vec![Color::BLACK; grid.vertex_count()];
    evaluate_colors_into(&mut colors, resolution, corners, noise, method, gradient)?;
    Ok(colors)
}
