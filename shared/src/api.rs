/// Position eliminated ants are parked at before they leave their colony.
/// Lies outside every play area, so renderers can skip it by bounds alone.
pub const ELIMINATED_SENTINEL: (f64, f64) = (-100.0, -100.0);

/// Aggregate numbers for one colony, read once per frame for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColonyStats {
    pub colony_id: u32,
    pub population: u32,
    pub food_stored: u32,
}

/// One ant marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntView {
    pub colony_id: u32,
    pub x: f64,
    pub y: f64,
    pub carrying: bool,
}

impl AntView {
    pub fn is_eliminated(&self) -> bool {
        self.x < 0.0 || self.y < 0.0
    }
}

/// One food deposit marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub amount: u32,
}

impl FoodView {
    /// Depleted deposits stay in the registry but are never drawn.
    pub fn is_active(&self) -> bool {
        self.amount > 0
    }
}

/// What happened during a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick: u64,
    /// Number of ant pairs removed by combat.
    pub engagements: u32,
    pub pickups: u32,
    pub deliveries: u32,
    pub births: u32,
    pub food_dropped: bool,
}
