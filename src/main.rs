use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use polyscribe::{Config, backend, replay};

#[derive(Parser, Debug)]
#[command(name = "polyscribe")]
#[command(
    version,
    about = "Click-to-place polyline drawing for Wayland compositors"
)]
struct Cli {
    /// Open the drawing window
    #[arg(long, short = 'a', action = ArgAction::SetTrue, conflicts_with = "replay")]
    active: bool,

    /// Replay an input script headless instead of opening a window
    #[arg(long, short = 'r', value_name = "SCRIPT", requires = "output")]
    replay: Option<PathBuf>,

    /// PNG file written after a replay
    #[arg(long, short = 'o', value_name = "PNG", requires = "replay")]
    output: Option<PathBuf>,

    /// Maximum committed points per polyline (overrides the config file)
    #[arg(long, value_name = "N")]
    max_points: Option<usize>,

    /// Load configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            Config::default()
        }),
    };

    if let Some(max_points) = cli.max_points {
        config.polyline.max_points = max_points;
        config.validate_and_clamp();
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if let (Some(script), Some(output)) = (&cli.replay, &cli.output) {
        let config = load_config(&cli)?;
        let state = replay::run(script, output, &config)
            .with_context(|| format!("Replay of {} failed", script.display()))?;
        println!(
            "Rendered {} polylines to {}",
            state.frame.len(),
            output.display()
        );
    } else if cli.active {
        if std::env::var("WAYLAND_DISPLAY").is_err() {
            log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
            log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
            return Err(anyhow::anyhow!(
                "Wayland environment required (WAYLAND_DISPLAY not set)"
            ));
        }

        let config = load_config(&cli)?;
        log::info!("Starting polyline window...");
        log::info!("Controls:");
        log::info!("  - Left click: start a polyline / place a point");
        log::info!("  - Move: drag the open segment");
        log::info!("  - Right click: cancel");
        for action in polyscribe::config::Action::ALL {
            log::info!(
                "  - {}: {}",
                action.label(),
                config.keybindings.bindings_for(action).join(", ")
            );
        }

        backend::run_wayland(config)?;

        log::info!("Polyline window closed.");
    } else {
        // No flags: show usage
        println!("polyscribe: Click-to-place polyline drawing for Wayland compositors");
        println!();
        println!("Usage:");
        println!("  polyscribe --active                             Open the drawing window");
        println!("  polyscribe --replay <SCRIPT> --output <PNG>     Replay a script headless");
        println!("  polyscribe --help                               Show help");
        println!();
        println!("Options:");
        println!("  --max-points <N>    Points per polyline (default 10)");
        println!("  --config <PATH>     Use an explicit config file");
        println!();
        println!("Requirements:");
        println!("  - Wayland compositor with xdg-shell support (for --active)");
    }

    Ok(())
}
