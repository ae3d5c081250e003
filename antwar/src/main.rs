mod app;
mod engine;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use crate::app::App;
use antwar::config::window_conf;
use antwar::{AppConfig, Simulation};

#[derive(Parser, Debug)]
#[command(author, version, about = "Two ant colonies foraging and fighting over food")]
struct Cli {
    /// TOML file with simulation and viewer settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random stream, overriding the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulation ticks advanced per rendered frame
    #[arg(short, long)]
    ticks_per_frame: Option<u32>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn build_app(cli: Cli) -> Result<App> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(ticks) = cli.ticks_per_frame {
        config.viewer.ticks_per_frame = ticks;
    }
    let simulation = Simulation::new(&config.simulation)?;
    Ok(App::new(&config, simulation))
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let mut app = match build_app(cli) {
        Ok(app) => app,
        Err(err) => {
            error!("failed to start: {err:#}");
            std::process::exit(1);
        }
    };
    app.run().await;
}
