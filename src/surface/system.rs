//! Surface creator: cached grid topology plus per-refresh recoloring.

use glam::Affine3A;
use log::{debug, info};

use super::coloring::{evaluate_colors_into, CornerPoints, SampleStats};
use super::mesh::GridMesh;
use super::SurfaceVertex;
use crate::error::Result;
use crate::gradient::Color;
use crate::noise::NoiseMethod;
use crate::params::SurfaceConfig;

/// Topology cache state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridState {
    NoGridBuilt,
    GridBuilt { resolution: u32 },
}

/// Owns the grid buffers and keeps them in sync with a [`SurfaceConfig`]
///
/// The grid is rebuilt only when the resolution changes; colors are
/// resampled on every refresh.
pub struct SurfaceCreator {
    mesh: Option<GridMesh>,
    colors: Vec<Color>,
    stats: SampleStats,
    /// Resolution the current grid was built at
    current_resolution: Option<u32>,
}

impl SurfaceCreator {
    /// Create an empty creator (no grid built yet)
    pub fn new() -> Self {
        Self {
            mesh: None,
            colors: Vec::new(),
            stats: SampleStats::default(),
            current_resolution: None,
        }
    }

    /// Create a creator and run the first refresh
    pub fn initialize(config: &SurfaceConfig, transform: &Affine3A) -> Result<Self> {
        let mut creator = Self::new();
        creator.refresh(config, transform)?;
        info!(
            "{} initialized: {} vertices, {} triangles",
            creator.mesh().map_or("surface", |m| m.name),
            creator.vertex_count(),
            creator.triangle_count()
        );
        Ok(creator)
    }

    /// Rebuild topology if the resolution changed, then recolor
    pub fn refresh(&mut self, config: &SurfaceConfig, transform: &Affine3A) -> Result<()> {
        let noise = config.noise();
        let method = noise.family.method(noise.dimensions, noise.seed)?;
        self.refresh_with_method(config, &CornerPoints::from_transform(transform), &method)
    }

    /// Refresh with an explicit noise method and pre-transformed corners
    ///
    /// Non-finite or far-off corners are rejected before any state changes.
    pub fn refresh_with_method<M: NoiseMethod + ?Sized>(
        &mut self,
        config: &SurfaceConfig,
        corners: &CornerPoints,
        method: &M,
    ) -> Result<()> {
        corners.validate()?;
        let resolution = config.resolution();
        if self.current_resolution != Some(resolution) {
            self.create_grid(resolution);
        }

        self.stats = evaluate_colors_into(
            &mut self.colors,
            resolution,
            corners,
            config.noise(),
            method,
            config.coloring(),
        )?;
        debug!(
            "Recolored {} vertices ({} noise, {} octaves, frequency {})",
            self.colors.len(),
            config.noise().family,
            config.noise().octaves,
            config.noise().frequency
        );
        Ok(())
    }

    fn create_grid(&mut self, resolution: u32) {
        debug!(
            "Rebuilding grid: {:?} -> {}",
            self.current_resolution, resolution
        );
        let mesh = GridMesh::new(resolution);
        self.colors = vec![Color::BLACK; mesh.vertex_count()];
        self.mesh = Some(mesh);
        self.current_resolution = Some(resolution);
    }

    pub fn state(&self) -> GridState {
        match self.current_resolution {
            None => GridState::NoGridBuilt,
            Some(resolution) => GridState::GridBuilt { resolution },
        }
    }

    pub fn mesh(&self) -> Option<&GridMesh> {
        self.mesh.as_ref()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Normalized sample statistics from the last refresh
    pub fn sample_stats(&self) -> &SampleStats {
        &self.stats
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.as_ref().map_or(0, GridMesh::vertex_count)
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.as_ref().map_or(0, GridMesh::triangle_count)
    }

    /// Interleaved vertex data for upload (empty before the first refresh)
    pub fn vertex_data(&self) -> Vec<SurfaceVertex> {
        let Some(mesh) = &self.mesh else {
            return Vec::new();
        };
        mesh.vertices
            .iter()
            .zip(&mesh.normals)
            .zip(&mesh.uvs)
            .zip(&self.colors)
            .map(|(((position, normal), uv), color)| SurfaceVertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv: uv.to_array(),
                color: color.to_array(),
            })
            .collect()
    }

    /// Triangle indices as raw bytes for upload
    pub fn index_bytes(&self) -> &[u8] {
        match &self.mesh {
            Some(mesh) => bytemuck::cast_slice(&mesh.indices),
            None => &[],
        }
    }
}

impl Default for SurfaceCreator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SurfaceError;
    use crate::gradient::Gradient;
    use crate::noise::{NoiseFamily, SampleRange};
    use crate::params::{GridConfig, NoiseConfig};
    use glam::Vec3;

    /// Constant noise
    struct Flat(f32);

    impl NoiseMethod for Flat {
        fn sample(&self, _point: Vec3, _frequency: f32) -> f32 {
            self.0
        }

        fn range(&self) -> SampleRange {
            SampleRange::Unsigned
        }
    }

    fn config(resolution: u32) -> SurfaceConfig {
        SurfaceConfig::new(
            GridConfig::new(resolution),
            NoiseConfig::default(),
            Gradient::grayscale(),
        )
        .unwrap()
    }

    #[test]
    fn test_starts_without_grid() {
        let creator = SurfaceCreator::new();
        assert_eq!(creator.state(), GridState::NoGridBuilt);
        assert!(creator.mesh().is_none());
        assert!(creator.colors().is_empty());
        assert!(creator.vertex_data().is_empty());
        assert!(creator.index_bytes().is_empty());
    }

    #[test]
    fn test_initialize_builds_grid() {
        let creator = SurfaceCreator::initialize(&config(4), &Affine3A::IDENTITY).unwrap();
        assert_eq!(creator.state(), GridState::GridBuilt { resolution: 4 });
        assert_eq!(creator.vertex_count(), 25);
        assert_eq!(creator.triangle_count(), 32);
        assert_eq!(creator.colors().len(), 25);
    }

    #[test]
    fn test_recolor_keeps_topology() {
        let config = config(8);
        let corners = CornerPoints::LOCAL;
        let mut creator = SurfaceCreator::new();

        creator.refresh_with_method(&config, &corners, &Flat(0.2)).unwrap();
        let mesh_before = creator.mesh().unwrap().clone();
        let bytes_before = creator.index_bytes().to_vec();
        let vertex_ptr = creator.mesh().unwrap().vertices.as_ptr();
        assert!(creator.colors().iter().all(|c| c.r == 0.2));
        assert_eq!(creator.sample_stats().count, 81);
        assert_eq!(creator.sample_stats().max, 0.2);

        let noisier = config
            .with_noise(NoiseConfig {
                octaves: 5,
                frequency: 4.0,
                ..NoiseConfig::default()
            })
            .unwrap();
        creator.refresh_with_method(&noisier, &corners, &Flat(0.9)).unwrap();

        assert_eq!(creator.mesh().unwrap(), &mesh_before);
        assert_eq!(creator.index_bytes(), bytes_before.as_slice());
        // Same allocation: the grid was not rebuilt
        assert_eq!(creator.mesh().unwrap().vertices.as_ptr(), vertex_ptr);
        assert!(creator.colors().iter().all(|c| (c.r - 0.9).abs() < 1e-6));
    }

    #[test]
    fn test_resolution_change_rebuilds() {
        let mut creator = SurfaceCreator::initialize(&config(2), &Affine3A::IDENTITY).unwrap();
        assert_eq!(creator.vertex_count(), 9);

        creator.refresh(&config(5), &Affine3A::IDENTITY).unwrap();
        assert_eq!(creator.state(), GridState::GridBuilt { resolution: 5 });
        assert_eq!(creator.vertex_count(), 36);
        assert_eq!(creator.colors().len(), 36);
        assert_eq!(creator.mesh().unwrap().indices.len(), 150);
        assert_eq!(creator.index_bytes().len(), 150 * 4);
    }

    #[test]
    fn test_transform_moves_sample_points() {
        let noise = NoiseConfig {
            family: NoiseFamily::Perlin,
            frequency: 1.7,
            ..NoiseConfig::default()
        };
        let config = SurfaceConfig::new(GridConfig::new(6), noise, Gradient::grayscale()).unwrap();

        let here = SurfaceCreator::initialize(&config, &Affine3A::IDENTITY).unwrap();
        let moved = SurfaceCreator::initialize(
            &config,
            &Affine3A::from_translation(Vec3::new(3.3, -1.1, 0.7)),
        )
        .unwrap();

        // Geometry stays local; only colors depend on the transform
        assert_eq!(here.mesh(), moved.mesh());
        assert_ne!(here.colors(), moved.colors());
    }

    #[test]
    fn test_rejects_unsampleable_transforms() {
        let base = config(4);
        let far = Affine3A::from_translation(Vec3::new(1.0e20, 0.0, 0.0));
        let nan = Affine3A::from_scale(Vec3::new(1.0, f32::NAN, 1.0));

        for family in NoiseFamily::ALL {
            let noise = NoiseConfig {
                family,
                ..NoiseConfig::default()
            };
            let with_family = base.with_noise(noise).unwrap();
            for transform in [far, nan] {
                assert!(matches!(
                    SurfaceCreator::initialize(&with_family, &transform),
                    Err(SurfaceError::InvalidConfiguration(_))
                ));
            }
        }

        // A failed refresh leaves the previous surface untouched
        let mut creator = SurfaceCreator::initialize(&base, &Affine3A::IDENTITY).unwrap();
        let colors = creator.colors().to_vec();
        assert!(creator.refresh(&config(9), &far).is_err());
        assert_eq!(creator.state(), GridState::GridBuilt { resolution: 4 });
        assert_eq!(creator.colors(), colors.as_slice());
    }

    #[test]
    fn test_runaway_frequency_never_reaches_sampling() {
        for family in NoiseFamily::ALL {
            let huge = NoiseConfig {
                frequency: 1.0e20,
                family,
                ..NoiseConfig::default()
            };
            let compounding = NoiseConfig {
                octaves: 70,
                lacunarity: 4.0,
                family,
                ..NoiseConfig::default()
            };
            for noise in [huge, compounding] {
                assert!(matches!(
                    SurfaceConfig::new(GridConfig::new(4), noise, Gradient::grayscale()),
                    Err(SurfaceError::InvalidConfiguration(_))
                ));
            }
        }
    }

    #[test]
    fn test_vertex_data_interleaves_buffers() {
        let mut creator = SurfaceCreator::new();
        creator
            .refresh_with_method(&config(1), &CornerPoints::LOCAL, &Flat(1.0))
            .unwrap();

        let data = creator.vertex_data();
        assert_eq!(data.len(), 4);
        assert_eq!(data[3].position, [0.5, 0.5, 0.0]);
        assert_eq!(data[3].normal, [0.0, 0.0, -1.0]);
        assert_eq!(data[3].uv, [1.0, 1.0]);
        assert_eq!(data[3].color, [1.0, 1.0, 1.0, 1.0]);

        let bytes: &[u8] = bytemuck::cast_slice(&data);
        assert_eq!(bytes.len(), 4 * std::mem::size_of::<SurfaceVertex>());
    }
}
