mod rendering;

pub use rendering::Renderer;

use macroquad::prelude::Color;

// Rendering constants
pub const BACKGROUND_COLOR_VAL: u32 = 0x1d2021;
pub const GROUND_COLOR_VAL: u32 = 0xf4ead5;
pub const NEST_COLOR_VAL: u32 = 0xe6c49f;
pub const NEST_ENTRANCE_COLOR_VAL: u32 = 0x4e2e0e;
pub const NEST_RIM_COLOR_VAL: u32 = 0xa67c52;
pub const FOOD_COLOR_VAL: u32 = 0x27ae60;
pub const NEST_ENTRANCE_RATIO: f32 = 0.35;
pub const ANT_DRAW_RADIUS: f32 = 3.0;

/// Marker color per colony, indexed by colony id.
pub const COLONY_COLORS: [Color; 2] = [
    Color::new(0.133, 0.133, 0.133, 1.0), // black
    Color::new(0.906, 0.298, 0.235, 1.0), // red
];

/// Which scent grids, if any, are painted under the ants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScentOverlay {
    Hidden,
    Food,
    Nest,
}
