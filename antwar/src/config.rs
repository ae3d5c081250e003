use anyhow::{Context, Result, ensure};
use macroquad::math::DVec2;
use macroquad::prelude::Conf;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

// Window constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

// World defaults
pub const DEFAULT_WORLD_WIDTH: f64 = 800.0;
pub const DEFAULT_WORLD_HEIGHT: f64 = 600.0;
pub const DEFAULT_INITIAL_ANTS: u32 = 50;
pub const DEFAULT_INITIAL_FOOD_SOURCES: u32 = 5;
pub const DEFAULT_FOOD_DROP_INTERVAL: u64 = 600;
pub const MAX_WORLD_DIMENSION: f64 = 100_000.0;

/// A colony's home: where it spawns ants and where carriers deliver food.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NestConfig {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl NestConfig {
    pub fn pos(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    pub initial_ants: u32,
    pub initial_food_sources: u32,
    pub food_drop_interval: u64, // in ticks
    pub seed: Option<u64>,       // None = seed from entropy
    pub nests: Vec<NestConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
            initial_ants: DEFAULT_INITIAL_ANTS,
            initial_food_sources: DEFAULT_INITIAL_FOOD_SOURCES,
            food_drop_interval: DEFAULT_FOOD_DROP_INTERVAL,
            seed: None,
            nests: vec![
                NestConfig {
                    name: "Black".to_string(),
                    x: 400.0,
                    y: 300.0,
                    radius: 40.0,
                },
                NestConfig {
                    name: "Red".to_string(),
                    x: 700.0,
                    y: 500.0,
                    radius: 40.0,
                },
            ],
        }
    }
}

impl SimulationConfig {
    /// Parses a config from TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width.is_finite() && self.height.is_finite(),
            "World dimensions must be finite, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.width > 0.0 && self.height > 0.0,
            "World dimensions must be positive, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.width <= MAX_WORLD_DIMENSION && self.height <= MAX_WORLD_DIMENSION,
            "World dimensions must not exceed {}, got {}x{}",
            MAX_WORLD_DIMENSION,
            self.width,
            self.height
        );
        ensure!(
            self.nests.len() == 2,
            "Exactly two nests are required, got {}",
            self.nests.len()
        );
        for nest in &self.nests {
            ensure!(
                nest.x.is_finite() && nest.y.is_finite() && nest.radius.is_finite(),
                "Nest '{}' must have a finite position and radius",
                nest.name
            );
            ensure!(
                nest.radius > 0.0,
                "Nest '{}' must have a positive radius",
                nest.name
            );
            ensure!(
                (0.0..self.width).contains(&nest.x) && (0.0..self.height).contains(&nest.y),
                "Nest '{}' at ({}, {}) lies outside the {}x{} play area",
                nest.name,
                nest.x,
                nest.y,
                self.width,
                self.height
            );
        }
        ensure!(
            self.food_drop_interval > 0,
            "food_drop_interval must be at least one tick"
        );
        Ok(())
    }
}

/// Viewer settings that never reach the simulation core.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewerConfig {
    pub ticks_per_frame: u32,
    pub show_scent: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            ticks_per_frame: 1,
            show_scent: false,
        }
    }
}

/// Configuration for the entire application, as read from one TOML file.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub viewer: ViewerConfig,
}

impl AppConfig {
    /// Loads the configuration from a TOML file or uses defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
                let config: Self = toml::from_str(&content).with_context(|| {
                    format!("Failed to parse config file '{}'", path.display())
                })?;
                info!(path = %path.display(), "loaded config");
                config
            }
            None => {
                info!("no config file provided, using defaults");
                Self::default()
            }
        };
        config.simulation.validate()?;
        Ok(config)
    }
}

pub fn window_conf() -> Conf {
    Conf {
        window_title: "AntWar".to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH as i32,
        window_height: DEFAULT_WINDOW_HEIGHT as i32,
        high_dpi: true,
        ..Default::default()
    }
}
