//! Noisesurface - Generate a noise-colored grid surface and preview it
//!
//! Builds the grid for the requested resolution, samples the fractal noise
//! field through the given transform and reports mesh statistics. With
//! `--output` the vertex colors are written as a top-down PNG.

use std::time::Instant;

use clap::Parser;
use log::info;

use noisesurface::cli::Args;
use noisesurface::preview;
use noisesurface::surface::SurfaceCreator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = args.surface_config()?;
    let transform = args.transform();
    let noise = config.noise();

    println!("Noise Surface");
    println!("  Resolution: {}", config.resolution());
    println!(
        "  Noise: {} {}D, frequency {}, {} octave(s), lacunarity {}, persistence {}, seed {}",
        noise.family,
        noise.dimensions,
        noise.frequency,
        noise.octaves,
        noise.lacunarity,
        noise.persistence,
        noise.seed
    );

    let start = Instant::now();
    let creator = SurfaceCreator::initialize(&config, &transform)?;
    let elapsed = start.elapsed();

    println!("  Vertices: {}", creator.vertex_count());
    println!("  Triangles: {}", creator.triangle_count());
    let stats = creator.sample_stats();
    println!(
        "  Samples: min {:.4}, max {:.4}, mean {:.4}",
        stats.min,
        stats.max,
        stats.mean()
    );
    println!("  Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    if let Some(path) = &args.output {
        preview::save_preview(path, config.resolution(), creator.colors(), args.pixel_scale)?;
        info!("Preview written to {}", path);
        println!("  Output: {}", path);
    }

    Ok(())
}
