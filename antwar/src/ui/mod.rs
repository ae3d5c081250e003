pub mod components;
pub mod events;

pub use ui_manager::UIManager;

mod ui_manager;

// Base sizes (logical points)
pub const BASE_PADDING: f32 = 6.0;
pub const BASE_SPACING: f32 = 6.0;

// Simulation speed bounds for the viewer
pub const MIN_TICKS_PER_FRAME: u32 = 1;
pub const MAX_TICKS_PER_FRAME: u32 = 32;
