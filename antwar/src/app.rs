use macroquad::prelude::*;
use tracing::info;

use crate::engine::Renderer;
use crate::ui::UIManager;
use crate::ui::events::AppAction;
use antwar::{AppConfig, Simulation};

/// Owns the world and everything that shows it.
pub struct App {
    simulation: Simulation,
    renderer: Renderer,
    ui: UIManager,
    paused: bool,
}

impl App {
    pub fn new(config: &AppConfig, simulation: Simulation) -> Self {
        let renderer = Renderer::new(config.simulation.width, config.simulation.height);
        let ui = UIManager::new(config.viewer.ticks_per_frame, config.viewer.show_scent);
        Self {
            simulation,
            renderer,
            ui,
            paused: false,
        }
    }

    /// Main loop. Rendering only ever sees a finished tick.
    pub async fn run(&mut self) {
        loop {
            let app_action = self.ui.update(&self.simulation, self.paused);
            self.handle_app_actions(app_action);
            self.handle_global_shortcuts();

            if !self.paused {
                for _ in 0..self.ui.ticks_per_frame() {
                    self.simulation.tick();
                }
                self.ui.announce_winner(&self.simulation);
            }

            self.renderer.render(&self.simulation, self.ui.scent_overlay());
            new_egui_macroquad::draw();

            next_frame().await;
        }
    }

    /// Handles global keyboard shortcuts.
    fn handle_global_shortcuts(&mut self) {
        // If a dialog popup is open, do not process shortcuts
        if self.ui.dialog_popup.is_some() {
            return;
        }

        if is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::P) {
            self.handle_app_actions(Some(AppAction::TogglePause));
        } else if is_key_pressed(KeyCode::R) {
            self.handle_app_actions(Some(AppAction::RequestReset));
        } else if is_key_pressed(KeyCode::S) {
            self.ui.cycle_scent_overlay();
        } else if is_key_pressed(KeyCode::Up) {
            self.ui.change_speed(true);
        } else if is_key_pressed(KeyCode::Down) {
            self.ui.change_speed(false);
        } else if is_key_pressed(KeyCode::D) {
            self.ui.toggle_stats_panel();
        } else if is_key_pressed(KeyCode::V) {
            self.ui.toggle_visual_options_panel();
        }
    }

    /// Processes application-level actions triggered by UI or shortcuts.
    fn handle_app_actions(&mut self, action: Option<AppAction>) {
        match action {
            Some(AppAction::TogglePause) => {
                self.paused = !self.paused;
                info!(paused = self.paused, tick = self.simulation.tick_count(), "pause toggled");
            }
            Some(AppAction::RequestReset) => {
                self.simulation.reset();
                self.ui.reset();
            }
            None => {}
        }
    }
}
