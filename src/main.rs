//! Mapgen CLI - procedural terrain generator.
//!
//! Run a terrain ruleset (initial generator plus ordered passes), then
//! export the resulting heightmap and, optionally, the tessellated mesh.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use mapgen::export::{
    export_grid_png, export_grid_raw, export_mesh_obj, PngExportOptions, RawFormat,
};
use mapgen::mesh::build_mesh;
use mapgen::{GeneratorConfig, PassCatalog, RulesetConfig};

/// Procedural terrain generator.
#[derive(Parser)]
#[command(name = "mapgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a terrain from a ruleset and export it.
    Generate {
        /// Path to a ruleset JSON file (defaults to the built-in ruleset).
        #[arg(short, long)]
        ruleset: Option<PathBuf>,

        /// Override the generator's random seed.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "terrain")]
        name: String,

        /// Heightmap export format.
        #[arg(short, long, default_value = "png")]
        format: ExportFormat,

        /// Also tessellate the heightmap and export a Wavefront OBJ mesh.
        #[arg(long)]
        mesh: bool,
    },
    /// Write a starter ruleset JSON file.
    Init {
        /// Destination path.
        #[arg(default_value = "ruleset.json")]
        path: PathBuf,
    },
    /// List the available passes and generators.
    Passes,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// 16-bit PNG (universal compatibility).
    Png,
    /// 16-bit RAW little-endian (Unity).
    Raw,
    /// 32-bit float RAW (high precision).
    RawFloat,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            ruleset,
            seed,
            output,
            name,
            format,
            mesh,
        } => run_generate(ruleset, seed, output, name, format, mesh),
        Commands::Init { path } => run_init(path),
        Commands::Passes => run_passes(),
    }
}

fn run_generate(
    ruleset_path: Option<PathBuf>,
    seed: Option<u64>,
    output: PathBuf,
    name: String,
    format: ExportFormat,
    mesh: bool,
) {
    let mut config = match &ruleset_path {
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error: cannot read ruleset {}: {}", path.display(), e);
                std::process::exit(1);
            });
            serde_json::from_str::<RulesetConfig>(&text).unwrap_or_else(|e| {
                eprintln!("Error: invalid ruleset {}: {}", path.display(), e);
                std::process::exit(1);
            })
        }
        None => RulesetConfig::default(),
    };

    if let Some(seed) = seed {
        match &mut config.generator {
            GeneratorConfig::RandomHeightmap(g) => g.seed = seed,
            GeneratorConfig::FbmHeightmap(g) => g.seed = seed as i32,
        }
    }

    println!("Mapgen - Procedural Terrain Generator");
    println!("=====================================");
    println!(
        "Grid: {}x{} tiles, heights [{}, {}]",
        config.context.width,
        config.context.height,
        config.context.min_height,
        config.context.max_height
    );
    println!("Passes: {}", config.passes.len());
    println!("Output: {}", output.display());

    let start = Instant::now();

    let ruleset = config.build();
    let grid = ruleset.generate().unwrap_or_else(|e| {
        eprintln!("Error: generation failed: {}", e);
        std::process::exit(1);
    });

    println!("Generation completed in {:.2?}", start.elapsed());
    if let Some((min, max)) = grid.height_range() {
        println!("Height range: [{:.3}, {:.3}]", min, max);
    }

    if let Err(e) = std::fs::create_dir_all(&output) {
        eprintln!("Error: cannot create {}: {}", output.display(), e);
        std::process::exit(1);
    }

    let export_result = match format {
        ExportFormat::Png => {
            let path = output.join(format!("{}.png", name));
            let options = PngExportOptions {
                min_height: config.context.min_height,
                max_height: config.context.max_height,
                ..Default::default()
            };
            export_grid_png(&grid, &path, &options)
                .map(|_| path)
                .map_err(|e| e.to_string())
        }
        ExportFormat::Raw => {
            let path = output.join(format!("{}.raw", name));
            export_grid_raw(
                &grid,
                &path,
                RawFormat::R16LittleEndian,
                config.context.min_height,
                config.context.max_height,
            )
            .map(|_| path)
            .map_err(|e| e.to_string())
        }
        ExportFormat::RawFloat => {
            let path = output.join(format!("{}.raw", name));
            export_grid_raw(&grid, &path, RawFormat::R32Float, 0.0, 0.0)
                .map(|_| path)
                .map_err(|e| e.to_string())
        }
    };

    match export_result {
        Ok(path) => println!("Heightmap written to {}", path.display()),
        Err(e) => {
            eprintln!("Error: heightmap export failed: {}", e);
            std::process::exit(1);
        }
    }

    if mesh {
        let tessellated = build_mesh(&grid);
        println!(
            "Mesh: {} vertices, {} triangles",
            tessellated.vertex_count(),
            tessellated.triangle_count()
        );

        let path = output.join(format!("{}.obj", name));
        if let Err(e) = export_mesh_obj(&tessellated, &path) {
            eprintln!("Error: mesh export failed: {}", e);
            std::process::exit(1);
        }
        println!("Mesh written to {}", path.display());
    }

    println!("\nDone in {:.2?}", start.elapsed());
}

fn run_init(path: PathBuf) {
    let config = RulesetConfig::default();
    let json = serde_json::to_string_pretty(&config).expect("default ruleset serializes");

    if let Err(e) = std::fs::write(&path, json) {
        eprintln!("Error: cannot write {}: {}", path.display(), e);
        std::process::exit(1);
    }

    println!("Starter ruleset written to {}", path.display());
    println!(
        "Edit it and run: mapgen generate --ruleset {}",
        path.display()
    );
}

fn run_passes() {
    let catalog = PassCatalog::with_builtins();

    println!("Available passes:");
    for name in catalog.pass_names() {
        println!("  {}", name);
    }

    println!("\nAvailable generators:");
    for name in catalog.generator_names() {
        println!("  {}", name);
    }
}
