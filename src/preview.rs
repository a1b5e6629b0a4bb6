//! Top-down PNG preview of per-vertex surface colors.

use std::path::Path;

use image::{imageops, Rgba, RgbaImage};

use crate::error::{Result, SurfaceError};
use crate::gradient::Color;

/// Rasterize one pixel per grid vertex, scaled up by `pixel_scale`
///
/// Grid row y = 0 is drawn at the bottom of the image so the preview matches
/// the mesh seen from the front (+y up).
pub fn render_preview(resolution: u32, colors: &[Color], pixel_scale: u32) -> Result<RgbaImage> {
    let side = resolution
        .checked_add(1)
        .ok_or_else(|| SurfaceError::invalid(format!("resolution {} is too large", resolution)))?;
    if colors.len() != (side as usize).pow(2) {
        return Err(SurfaceError::invalid(format!(
            "expected {} colors for resolution {}, got {}",
            (side as usize).pow(2),
            resolution,
            colors.len()
        )));
    }
    if pixel_scale == 0 {
        return Err(SurfaceError::invalid("pixel scale must be >= 1"));
    }

    let img = RgbaImage::from_fn(side, side, |x, row| {
        let y = side - 1 - row;
        Rgba(colors[(y * side + x) as usize].to_rgba8())
    });

    if pixel_scale == 1 {
        return Ok(img);
    }
    let scaled = side.checked_mul(pixel_scale).ok_or_else(|| {
        SurfaceError::invalid(format!(
            "preview of {} pixels scaled by {} overflows the image size",
            side, pixel_scale
        ))
    })?;
    Ok(imageops::resize(&img, scaled, scaled, imageops::FilterType::Nearest))
}

/// Render and save a preview as PNG
pub fn save_preview(
    path: impl AsRef<Path>,
    resolution: u32,
    colors: &[Color],
    pixel_scale: u32,
) -> Result<()> {
    let img = render_preview(resolution, colors, pixel_scale)?;
    img.save(path.as_ref())?;
    Ok(())
}
