use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

use figlayout::config::LayoutConfig;
use figlayout::layout::{Overlay, OverlayOptions};
use figlayout::plotting::Figure;

#[derive(Parser)]
#[command(name = "figlayout")]
#[command(
    about = "Scientific figure layout helper",
    long_about = "Renders JSON layout documents (subplot grids, background overlay shapes, panel labels) to SVG, or a bare coordinate grid for planning a layout."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a layout document to SVG
    Render {
        /// Layout document (JSON).
        #[arg(long, required = true)]
        config: String,
        /// Output SVG file.
        #[arg(long, required = true)]
        out: String,
        /// Force overwrite of an existing output file.
        #[arg(short, long)]
        force: bool,
        /// Show the overlay grid, creating an overlay if the document has none.
        #[arg(long)]
        show_grid: bool,
    },
    /// Render an empty figure showing only the overlay grid
    Grid {
        /// Output SVG file.
        #[arg(long, required = true)]
        out: String,
        /// Distance between grid lines, as a fraction of the figure.
        #[arg(long, default_value_t = 0.1)]
        spacing: f64,
        /// Figure width in pixels.
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        /// Figure height in pixels.
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        /// Force overwrite of an existing output file.
        #[arg(short, long)]
        force: bool,
    },
}

// Helper to check the output path and create its directory
fn check_output_path(out: &str, force: bool) -> Result<()> {
    let path = Path::new(out);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create directory {:?}", parent))?;
        }
    }

    if !force && path.exists() {
        bail!("Output file {} already exists. Use --force to overwrite.", out);
    }
    Ok(())
}

fn render(config: &str, out: &str, force: bool, show_grid: bool) -> Result<()> {
    check_output_path(out, force)?;

    let mut layout = LayoutConfig::load(config)
        .with_context(|| format!("Error loading layout document {}", config))?;
    if show_grid {
        layout.show_grid();
    }

    let mut fig = layout
        .build()
        .with_context(|| format!("Error building figure from {}", config))?;
    fig.save(out)
        .with_context(|| format!("Error writing {}", out))?;
    info!("Wrote {}", out);
    Ok(())
}

fn grid(out: &str, spacing: f64, width: f64, height: f64, force: bool) -> Result<()> {
    check_output_path(out, force)?;

    let mut fig = Figure::new(width, height);
    let opts = OverlayOptions::default().visible(true).spacing(spacing);
    Overlay::new(&mut fig, opts).context("Error creating overlay grid")?;
    fig.save(out)
        .with_context(|| format!("Error writing {}", out))?;
    info!("Wrote {}x{} grid (spacing {}) to {}", width, height, spacing, out);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        };
        match file {
            Ok(file) => {
                log_builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Could not open log file '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    }
    log_builder.init();

    let result = match &cli.command {
        Commands::Render {
            config,
            out,
            force,
            show_grid,
        } => render(config, out, *force, *show_grid),
        Commands::Grid {
            out,
            spacing,
            width,
            height,
            force,
        } => grid(out, *spacing, *width, *height, *force),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_output_path_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("fig.svg");
        std::fs::write(&out, "<svg/>").unwrap();
        let out = out.to_str().unwrap();

        assert!(check_output_path(out, false).is_err());
        assert!(check_output_path(out, true).is_ok());
    }

    #[test]
    fn test_grid_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("grid.svg");
        let out = out.to_str().unwrap();

        grid(out, 0.25, 200.0, 100.0, false).unwrap();
        let svg = std::fs::read_to_string(out).unwrap();
        assert!(svg.contains("width=\"200\""));
        assert!(grid(out, 0.25, 200.0, 100.0, false).is_err());
        assert!(grid(out, 0.0, 200.0, 100.0, true).is_err());
    }
}
