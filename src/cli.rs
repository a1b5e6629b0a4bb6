//! Command-line argument parsing.

use clap::Parser;
use glam::{Affine3A, Quat, Vec3};

use crate::error::Result;
use crate::gradient::Gradient;
use crate::noise::NoiseFamily;
use crate::params::{GridConfig, NoiseConfig, SurfaceConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "noisesurface")]
#[command(about = "Noise-colored procedural grid surface generator", long_about = None)]
pub struct Args {
    /// Grid cells per side
    #[arg(long, default_value_t = 10)]
    pub resolution: u32,

    /// Base noise frequency (cycles per world unit)
    #[arg(long, default_value_t = 1.0)]
    pub frequency: f32,

    /// Number of fractal octaves
    #[arg(long, default_value_t = 1)]
    pub octaves: u32,

    /// Frequency multiplier per octave
    #[arg(long, default_value_t = 2.0)]
    pub lacunarity: f32,

    /// Amplitude multiplier per octave
    #[arg(long, default_value_t = 0.5)]
    pub persistence: f32,

    /// Spatial axes the noise reads (1, 2 or 3)
    #[arg(long, default_value_t = 3)]
    pub dimensions: u8,

    /// Noise family: value (default), perlin, simplex
    #[arg(long, value_name = "FAMILY", default_value = "value")]
    pub noise: String,

    /// Noise seed
    #[arg(long, default_value_t = 0)]
    pub seed: u32,

    /// Color gradient preset: grayscale (default), terrain
    #[arg(long, value_name = "PRESET", default_value = "grayscale")]
    pub gradient: String,

    /// Surface translation in world units
    #[arg(long, value_name = "X,Y,Z", default_value = "0,0,0", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub offset: Vec3,

    /// Rotation about the surface's z axis (degrees)
    #[arg(long, value_name = "DEGREES", default_value_t = 0.0, allow_hyphen_values = true)]
    pub rotate_deg: f32,

    /// Uniform surface scale
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Write a top-down PNG preview of the vertex colors
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Preview pixels per grid vertex
    #[arg(long, default_value_t = 4)]
    pub pixel_scale: u32,
}

impl Args {
    /// Build and validate the surface configuration from flags
    pub fn surface_config(&self) -> Result<SurfaceConfig> {
        let family: NoiseFamily = self.noise.parse()?;
        let coloring: Gradient = self.gradient.parse()?;
        let noise = NoiseConfig {
            frequency: self.frequency,
            octaves: self.octaves,
            lacunarity: self.lacunarity,
            persistence: self.persistence,
            dimensions: self.dimensions,
            family,
            seed: self.seed,
        };
        SurfaceConfig::new(GridConfig::new(self.resolution), noise, coloring)
    }

    /// Local-to-world transform of the surface
    pub fn transform(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_z(self.rotate_deg.to_radians()),
            self.offset,
        )
    }
}

/// Parse "x,y,z" into a vector
fn parse_vec3(s: &str) -> std::result::Result<Vec3, String> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| format!("invalid number in '{}': {}", s, e))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected X,Y,Z, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SurfaceError;

    #[test]
    fn test_defaults_build_valid_config() {
        let args = Args::parse_from(["noisesurface"]);
        let config = args.surface_config().unwrap();
        assert_eq!(config.resolution(), 10);
        assert_eq!(config.noise(), &NoiseConfig::default());
        assert_eq!(args.transform(), Affine3A::IDENTITY);
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::parse_from([
            "noisesurface",
            "--resolution",
            "64",
            "--noise",
            "Perlin",
            "--octaves",
            "6",
            "--dimensions",
            "2",
            "--gradient",
            "terrain",
            "--offset",
            "1.5,-2,0.25",
        ]);
        let config = args.surface_config().unwrap();
        assert_eq!(config.resolution(), 64);
        assert_eq!(config.noise().family, NoiseFamily::Perlin);
        assert_eq!(config.noise().octaves, 6);
        assert_eq!(config.noise().dimensions, 2);
        assert_eq!(config.coloring(), &Gradient::terrain());
        assert_eq!(args.offset, Vec3::new(1.5, -2.0, 0.25));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let args = Args::parse_from(["noisesurface", "--noise", "worley"]);
        assert!(matches!(
            args.surface_config(),
            Err(SurfaceError::InvalidConfiguration(_))
        ));

        let args = Args::parse_from(["noisesurface", "--resolution", "0"]);
        assert!(args.surface_config().is_err());

        let args = Args::parse_from(["noisesurface", "--dimensions", "4"]);
        assert!(matches!(
            args.surface_config(),
            Err(SurfaceError::UnsupportedDimensionality(4))
        ));
    }

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("1, 2, 3"), Ok(Vec3::new(1.0, 2.0, 3.0)));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("a,b,c").is_err());
    }
}
