use catppuccin_egui::set_theme;
use macroquad::prelude::*;

use crate::engine::ScentOverlay;
use crate::ui::components::{
    AntStatusBar, DialogPopup, DialogResult, StatsPanel, VisualOptionsPanel,
};
use crate::ui::events::AppAction;
use antwar::Simulation;

fn auto_zoom(ctx: &egui::Context, base_px: egui::Vec2) -> f32 {
    let logical = ctx.screen_rect().size();
    let win_px = logical * ctx.pixels_per_point(); // physical pixels
    let s = (win_px.x / base_px.x).min(win_px.y / base_px.y);
    ((s * 4.0).round() / 4.0).clamp(0.75, 3.0) // snap to 0.25 for crisp text
}

pub struct UIManager {
    stats_panel: StatsPanel,
    pub visual_options_panel: VisualOptionsPanel,
    pub ant_status_bar: AntStatusBar,
    pub dialog_popup: Option<DialogPopup>,
    winner_announced: bool,
    last_win_px: egui::Vec2,
}

impl UIManager {
    pub fn new(ticks_per_frame: u32, show_scent: bool) -> Self {
        Self {
            stats_panel: StatsPanel::new(ticks_per_frame),
            visual_options_panel: VisualOptionsPanel::new(show_scent),
            ant_status_bar: AntStatusBar::new(),
            dialog_popup: None,
            winner_announced: false,
            last_win_px: egui::vec2(0.0, 0.0),
        }
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.stats_panel.ticks_per_frame
    }

    pub fn change_speed(&mut self, faster: bool) {
        self.stats_panel.change_speed(faster);
    }

    pub fn scent_overlay(&self) -> ScentOverlay {
        self.visual_options_panel.scent_overlay
    }

    pub fn cycle_scent_overlay(&mut self) {
        self.visual_options_panel.cycle_overlay();
    }

    pub fn toggle_stats_panel(&mut self) {
        self.stats_panel.toggle();
    }

    pub fn toggle_visual_options_panel(&mut self) {
        self.visual_options_panel.toggle();
    }

    pub fn show_dialog(&mut self, dialog: DialogPopup) {
        self.dialog_popup = Some(dialog);
    }

    /// Pops the winner dialog the first time only one colony is left.
    pub fn announce_winner(&mut self, simulation: &Simulation) {
        if self.winner_announced {
            return;
        }
        if let Some(winner) = simulation.winner() {
            self.winner_announced = true;
            self.show_dialog(
                DialogPopup::new_info(
                    "Game over",
                    &format!(
                        "{} wins after {} ticks.",
                        winner.name,
                        simulation.tick_count()
                    ),
                )
                .with_reset(),
            );
        }
    }

    /// Forgets the previous announcement so the next game can have one.
    pub fn reset(&mut self) {
        self.winner_announced = false;
        self.dialog_popup = None;
    }

    /// Draws every panel and returns the action the user asked for, if any.
    pub fn update(&mut self, simulation: &Simulation, paused: bool) -> Option<AppAction> {
        self.stats_panel.update();

        let mut app_action = None;

        new_egui_macroquad::ui(|egui_ctx| {
            set_theme(egui_ctx, catppuccin_egui::MOCHA);
            // Auto-zoom only on window resize or DPI change
            let win_px = egui_ctx.screen_rect().size() * egui_ctx.pixels_per_point();
            if (win_px.x - self.last_win_px.x).abs() > 1.0
                || (win_px.y - self.last_win_px.y).abs() > 1.0
            {
                self.last_win_px = win_px;
                let target = auto_zoom(egui_ctx, egui::vec2(1920.0, 1080.0));
                egui_ctx.set_zoom_factor(target);
            }

            self.ant_status_bar.draw(egui_ctx, simulation);

            if let Some(dialog) = &mut self.dialog_popup {
                if !dialog.draw(egui_ctx) {
                    if dialog.result.take() == Some(DialogResult::ResetRequested) {
                        app_action = Some(AppAction::RequestReset);
                    }
                    self.dialog_popup = None;
                }
            } else {
                app_action = self.stats_panel.draw(egui_ctx, simulation, paused);
                self.visual_options_panel.draw(egui_ctx);
            }
        });

        app_action
    }
}
