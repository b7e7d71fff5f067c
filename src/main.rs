//! Arenagen CLI - procedural circular arena generator.
//!
//! Generate a noise-based terrain grid and its radial resource grid,
//! print both to the terminal and export preview maps.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use arenagen::arena::{Arena, ArenaConfig};
use arenagen::export::{
    export_elevation_png, export_resource_map_png, export_terrain_map_png,
    render_elevation, ExportError, HeightmapOptions, MapOptions,
};
use arenagen::grid::compute_circular_mask;
use arenagen::terrain::TerrainBands;

/// Procedural circular arena generator.
#[derive(Parser)]
#[command(name = "arenagen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an arena and print its grids.
    Generate {
        /// Grid width and height in cells (odd values have a true center).
        #[arg(short, long, default_value = "21")]
        size: usize,

        /// Random seed for reproducible generation.
        #[arg(long)]
        seed: Option<u64>,

        /// Fraction of the elevation range that is water.
        #[arg(long, default_value = "0.25")]
        water: f64,

        /// Fraction of the elevation range that is sand.
        #[arg(long, default_value = "0.05")]
        sand: f64,

        /// Fraction of the elevation range that is grass.
        #[arg(long, default_value = "0.45")]
        grass: f64,

        /// Fraction of the elevation range that is rock.
        #[arg(long, default_value = "0.25")]
        rock: f64,

        /// Grid cells per noise lattice cell.
        #[arg(long, default_value = "10.0")]
        scale: f32,

        /// Number of noise octaves.
        #[arg(long, default_value = "1")]
        octaves: u8,

        /// Print raw elevation values as well as terrain glyphs.
        #[arg(long)]
        elevation: bool,

        /// Output directory for preview maps.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "arena")]
        name: String,

        /// Pixels per grid cell in the preview maps.
        #[arg(long, default_value = "16")]
        cell_pixels: u32,

        /// Skip PNG export.
        #[arg(long)]
        no_png: bool,
    },

    /// Display mask information for a grid size.
    Info {
        /// Grid width and height in cells.
        #[arg(short, long, default_value = "21")]
        size: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            size,
            seed,
            water,
            sand,
            grass,
            rock,
            scale,
            octaves,
            elevation,
            output,
            name,
            cell_pixels,
            no_png,
        } => {
            let config = ArenaConfig {
                size,
                bands: TerrainBands { water, sand, grass, rock },
                noise_scale: scale,
                octaves,
                seed,
            };
            run_generate(&config, elevation, &output, &name, cell_pixels, no_png);
        }
        Commands::Info { size } => {
            run_info(size);
        }
    }
}

fn run_generate(
    config: &ArenaConfig,
    show_elevation: bool,
    output: &Path,
    name: &str,
    cell_pixels: u32,
    no_png: bool,
) {
    if config.size % 2 == 0 {
        eprintln!("Warning: even grid size {} has no true center cell", config.size);
    }

    println!("Arenagen - Procedural Arena Generator");
    println!("=====================================");
    println!("Grid: {}x{}", config.size, config.size);

    let start = Instant::now();
    let arena = Arena::generate(config).unwrap_or_else(|e| {
        eprintln!("Error during generation: {}", e);
        std::process::exit(1);
    });
    println!("Seed: {}", arena.seed());
    println!("Generation completed in {:.2?}", start.elapsed());

    println!("\nTerrain:");
    print!("{}", arena.terrain);
    if show_elevation {
        println!("\nElevation:");
        print!("{}", render_elevation(arena.terrain.elevation()));
    }
    for (category, count) in arena.terrain.category_counts() {
        println!("  {:<6} {}", category.name(), count);
    }

    println!("\nResources (quantity + type):");
    print!("{}", arena.resources);
    for (kind, count) in arena.resources.type_counts() {
        println!("  {:<8} {}", kind.name(), count);
    }
    println!(
        "  mean quantity {:.3}, mean quality {:.3}",
        arena.resources.mean_quantity(),
        arena.resources.mean_quality()
    );

    if no_png {
        return;
    }

    println!("\nExporting preview maps...");
    if let Err(e) = export_all(&arena, output, name, cell_pixels) {
        eprintln!("Error exporting PNG: {}", e);
        std::process::exit(1);
    }
    println!("  Exported 3 PNG files: {}/{}_*.png", output.display(), name);
}

fn export_all(arena: &Arena, output: &Path, name: &str, cell_pixels: u32) -> Result<(), ExportError> {
    std::fs::create_dir_all(output)?;

    let map_options = MapOptions {
        cell_pixels,
        ..Default::default()
    };
    let height_options = HeightmapOptions {
        cell_pixels,
        ..Default::default()
    };

    export_elevation_png(
        arena.terrain.elevation(),
        &output.join(format!("{}_elevation.png", name)),
        &height_options,
    )?;
    export_terrain_map_png(
        arena.terrain.categories(),
        &output.join(format!("{}_terrain.png", name)),
        &map_options,
    )?;
    export_resource_map_png(
        arena.resources.grid(),
        &output.join(format!("{}_resources.png", name)),
        &map_options,
    )?;
    Ok(())
}

fn run_info(size: usize) {
    let mask = compute_circular_mask(size);
    let (row, col) = mask.center();
    let total = size * size;

    println!("Arena Configuration");
    println!("===================");
    println!("Grid: {}x{} ({} cells)", size, size, total);
    println!("Center: ({}, {})", row, col);
    println!("Radius: {}", size / 2);
    println!("Inside circle: {} cells", mask.inside_count());
    println!("Masked out: {} cells", total - mask.inside_count());
}
