pub mod ant;
pub mod colony;
pub mod combat;
pub mod food;
pub mod scent;
mod sim;

// Re-export key types for easier imports
pub use ant::{Ant, AntEvent, AntKey, AntState};
pub use colony::{Colony, ColonyTickStats, Nest};
pub use combat::Engagement;
pub use food::{FoodId, FoodRegistry, FoodSource, FoodTier};
pub use scent::ScentField;
pub use sim::Simulation;

// Scent constants
pub const SCENT_CELL_SIZE: f64 = 20.0;
pub const SCENT_DECAY: f64 = 0.98; // Applied to every cell once per tick
pub const SCENT_STRENGTH: f64 = 100.0;

// Ant behavior constants
pub const TRAIL_FOLLOW_CHANCE: f64 = 0.8;
pub const TRAIL_STEP: f64 = 1.2;
pub const TRAIL_JITTER: f64 = 0.2; // Per-axis, uniform in [-TRAIL_JITTER, TRAIL_JITTER]
pub const WANDER_STEP: f64 = 1.2;
pub const SCOUT_CHANCE: f64 = 0.1;
pub const SCOUT_STEP: f64 = 3.5;
pub const HOMING_SPEED: f64 = 1.5;
pub const EDGE_INSET: f64 = 1e-6; // Keeps clamped ants off the far edge of the last cell

// Food constants
pub const MIN_FOOD_RADIUS: f64 = 4.0;
pub const FOOD_RADIUS_DIVISOR: f64 = 12.0;

// Colony constants
pub const REPRODUCTION_COST: u32 = 10;
pub const REPRODUCTION_RATE: f64 = 0.01;

// Combat constants
pub const COMBAT_RADIUS: f64 = 10.0;
