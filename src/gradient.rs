//! Color gradients: ordered color keys evaluated by linear interpolation.

use std::cmp::Ordering;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

use crate::error::{Result, SurfaceError};

/// Built-in gradient names (case-insensitive)
pub const PRESETS: &[&str] = &["grayscale", "terrain"];

/// Linear RGBA color with components in [0, 1]
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantize to 8-bit RGBA (clamped)
    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_array()
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        let v = Vec4::from_array(self.to_array()).lerp(Vec4::from_array(other.to_array()), t);
        Color {
            r: v.x,
            g: v.y,
            b: v.z,
            a: v.w,
        }
    }
}

/// Color key at a position in [0, 1]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorKey {
    pub time: f32,
    pub color: Color,
}

impl ColorKey {
    pub const fn new(time: f32, color: Color) -> Self {
        Self { time, color }
    }
}

/// Ordered color keys with clamped linear interpolation
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    keys: Vec<ColorKey>,
}

impl Gradient {
    /// Build a gradient from unordered keys
    ///
    /// Keys are sorted by time. At least one key is required and every time
    /// must lie in [0, 1].
    pub fn new(mut keys: Vec<ColorKey>) -> Result<Self> {
        if keys.is_empty() {
            return Err(SurfaceError::invalid("gradient needs at least one color key"));
        }
        if let Some(key) = keys
            .iter()
            .find(|k| !k.time.is_finite() || !(0.0..=1.0).contains(&k.time))
        {
            return Err(SurfaceError::invalid(format!(
                "gradient key time must be in [0, 1], got {}",
                key.time
            )));
        }
        // Stable sort keeps insertion order between keys sharing a time
        keys.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
        Ok(Self { keys })
    }

    /// Black to white
    pub fn grayscale() -> Self {
        Self {
            keys: vec![
                ColorKey::new(0.0, Color::BLACK),
                ColorKey::new(1.0, Color::WHITE),
            ],
        }
    }

    /// Deep water, shallows, sand, grass, rock, snow
    pub fn terrain() -> Self {
        Self {
            keys: vec![
                ColorKey::new(0.0, Color::rgb(0.05, 0.10, 0.35)),
                ColorKey::new(0.35, Color::rgb(0.15, 0.40, 0.75)),
                ColorKey::new(0.45, Color::rgb(0.85, 0.80, 0.55)),
                ColorKey::new(0.55, Color::rgb(0.25, 0.60, 0.20)),
                ColorKey::new(0.80, Color::rgb(0.45, 0.40, 0.35)),
                ColorKey::new(1.0, Color::WHITE),
            ],
        }
    }

    pub fn keys(&self) -> &[ColorKey] {
        &self.keys
    }

    /// Evaluate the gradient at `t`, clamping outside the key span
    pub fn evaluate(&self, t: f32) -> Color {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];
        if t.is_nan() || t <= first.time {
            return first.color;
        }
        if t >= last.time {
            return last.color;
        }

        // first.time < t < last.time, so 1 <= upper < len
        let upper = self.keys.partition_point(|k| k.time < t);
        let b = self.keys[upper];
        if b.time == t {
            return b.color;
        }
        let a = self.keys[upper - 1];
        let span = b.time - a.time;
        a.color.lerp(b.color, (t - a.time) / span)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::grayscale()
    }
}

impl FromStr for Gradient {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "grayscale" | "greyscale" => Ok(Self::grayscale()),
            "terrain" => Ok(Self::terrain()),
            other => Err(SurfaceError::invalid(format!(
                "unknown gradient '{}'. Supported: {}",
                other,
                PRESETS.join(", ")
            ))),
        }
    }
}
