// Components for the UI system
mod ant_status_bar;
mod dialog;
mod stats_panel;
mod visual_options;

// Export components
pub use ant_status_bar::AntStatusBar;
pub use dialog::{DialogPopup, DialogResult};
pub use stats_panel::StatsPanel;
pub use visual_options::VisualOptionsPanel;
