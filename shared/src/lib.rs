//! Types shared between the simulation core and anything that displays it.

pub mod api;
pub mod util;

pub use api::{AntView, ColonyStats, ELIMINATED_SENTINEL, FoodView, TickSummary};
