//! Noisesurface library - Procedural grid mesh colored by layered coherent noise

pub mod cli;
pub mod error;
pub mod gradient;
pub mod noise;
pub mod params;
pub mod preview;
pub mod surface;

pub use error::{Result, SurfaceError};
