//! Two rival ant colonies foraging over shared food and fighting on contact.
//!
//! [`simulation::Simulation`] is the whole world; call
//! [`tick`](simulation::Simulation::tick) once per frame and read the
//! snapshot accessors between ticks.

pub mod config;
pub mod simulation;

pub use config::{AppConfig, NestConfig, SimulationConfig};
pub use simulation::Simulation;
