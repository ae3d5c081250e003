use crate::engine::COLONY_COLORS;
use crate::ui::events::AppAction;
use crate::ui::{BASE_PADDING, BASE_SPACING, MAX_TICKS_PER_FRAME, MIN_TICKS_PER_FRAME};
use antwar::Simulation;
use macroquad::prelude::*;
use egui::{Color32, RichText};

/// Side window with the live numbers and the speed controls.
pub struct StatsPanel {
    displayed_fps: i32,
    fps_timer: f32,
    show_stats: bool,
    pub ticks_per_frame: u32,
}

impl StatsPanel {
    pub fn new(ticks_per_frame: u32) -> Self {
        Self {
            displayed_fps: get_fps(),
            fps_timer: 0.0,
            show_stats: true,
            ticks_per_frame: ticks_per_frame.clamp(MIN_TICKS_PER_FRAME, MAX_TICKS_PER_FRAME),
        }
    }

    /// Update the FPS counter
    pub fn update(&mut self) {
        self.fps_timer += get_frame_time();
        if self.fps_timer >= 0.5 {
            self.displayed_fps = get_fps();
            self.fps_timer = 0.0;
        }
    }

    pub fn toggle(&mut self) {
        self.show_stats = !self.show_stats;
    }

    /// Doubles or halves the speed within the allowed range.
    pub fn change_speed(&mut self, faster: bool) {
        self.ticks_per_frame = if faster {
            self.ticks_per_frame.saturating_mul(2)
        } else {
            self.ticks_per_frame / 2
        }
        .clamp(MIN_TICKS_PER_FRAME, MAX_TICKS_PER_FRAME);
    }

    pub fn draw(
        &mut self,
        egui_ctx: &egui::Context,
        simulation: &Simulation,
        paused: bool,
    ) -> Option<AppAction> {
        if !self.show_stats {
            return None;
        }

        let mut app_action = None;

        egui::Window::new("Colonies")
            .resizable(false)
            .collapsible(true)
            .default_pos(egui::pos2(screen_width() - 260.0, 32.0))
            .show(egui_ctx, |ui| {
                ui.heading("Simulation");
                ui.group(|ui| {
                    let fps_color = if self.displayed_fps > 55 {
                        Color32::from_rgb(0, 180, 0)
                    } else if self.displayed_fps > 30 {
                        Color32::from_rgb(220, 180, 70)
                    } else {
                        Color32::from_rgb(220, 100, 100)
                    };

                    egui::Grid::new("sim_stats")
                        .num_columns(2)
                        .spacing([BASE_SPACING * 2.0, BASE_SPACING])
                        .show(ui, |ui| {
                            ui.label("FPS:");
                            ui.colored_label(fps_color, self.displayed_fps.to_string());
                            ui.end_row();

                            ui.label("Tick:");
                            ui.label(simulation.tick_count().to_string());
                            ui.end_row();

                            ui.label("Food sources:");
                            ui.label(simulation.food().active_count().to_string());
                            ui.end_row();

                            ui.label("Total ants:");
                            ui.label(simulation.total_ant_count().to_string());
                            ui.end_row();
                        });

                    ui.add(
                        egui::Slider::new(
                            &mut self.ticks_per_frame,
                            MIN_TICKS_PER_FRAME..=MAX_TICKS_PER_FRAME,
                        )
                        .logarithmic(true)
                        .text("ticks / frame"),
                    );

                    ui.horizontal(|ui| {
                        let pause_label = if paused { "Resume" } else { "Pause" };
                        if ui.button(pause_label).clicked() {
                            app_action = Some(AppAction::TogglePause);
                        }
                        if ui.button("Reset").clicked() {
                            app_action = Some(AppAction::RequestReset);
                        }
                    });
                });

                ui.add_space(BASE_PADDING);
                ui.heading("Colonies");
                ui.group(|ui| {
                    egui::Grid::new("colony_stats")
                        .num_columns(3)
                        .spacing([BASE_SPACING * 2.0, BASE_SPACING])
                        .show(ui, |ui| {
                            ui.label("");
                            ui.label("Ants");
                            ui.label("Food");
                            ui.end_row();

                            for (colony, stats) in
                                simulation.colonies().iter().zip(simulation.colony_stats())
                            {
                                let color =
                                    COLONY_COLORS[colony.colony_id as usize % COLONY_COLORS.len()];
                                let colony_color = Color32::from_rgba_unmultiplied(
                                    (color.r * 255.0) as u8,
                                    (color.g * 255.0) as u8,
                                    (color.b * 255.0) as u8,
                                    255,
                                );
                                if colony.is_extinct() {
                                    ui.label(
                                        RichText::new(&colony.name)
                                            .color(colony_color)
                                            .strikethrough(),
                                    );
                                } else {
                                    ui.colored_label(colony_color, &colony.name);
                                }
                                ui.label(stats.population.to_string());
                                ui.label(stats.food_stored.to_string());
                                ui.end_row();
                            }
                        });
                });
            });

        app_action
    }
}
