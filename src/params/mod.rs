//! Parameter definitions with documented ranges and semantics.
//!
//! Raw parameter structs carry `Default` values matching the interactive
//! tool; [`SurfaceConfig`] bundles and validates them at the boundary.

mod grid;
mod noise;
mod surface;

// Re-export all types
pub use self::grid::{GridConfig, MAX_RESOLUTION};
pub use self::noise::{NoiseConfig, MAX_FREQUENCY, MAX_OCTAVES};
pub use self::surface::SurfaceConfig;
