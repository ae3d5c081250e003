use crate::engine::COLONY_COLORS;
use antwar::Simulation;
use new_egui_macroquad::egui;

/// Bottom bar split between the colonies in proportion to their populations.
pub struct AntStatusBar {}

fn to_color32(color: macroquad::prelude::Color) -> egui::Color32 {
    egui::Color32::from_rgba_premultiplied(
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
        255,
    )
}

impl AntStatusBar {
    pub fn new() -> Self {
        Self {}
    }

    pub fn draw(&mut self, ctx: &egui::Context, simulation: &Simulation) -> f32 {
        let total_ants: u32 = simulation
            .colony_stats()
            .iter()
            .map(|stats| stats.population)
            .sum();

        if total_ants == 0 {
            return 0.0;
        }

        let segments: Vec<(u32, egui::Color32, &str)> = simulation
            .colonies()
            .iter()
            .filter(|colony| !colony.is_extinct())
            .map(|colony| {
                let color = COLONY_COLORS[colony.colony_id as usize % COLONY_COLORS.len()];
                (colony.population(), to_color32(color), colony.name.as_str())
            })
            .collect();

        let bar_height = 15.0;

        egui::TopBottomPanel::bottom("ant_status_bar")
            .exact_height(bar_height)
            .resizable(false)
            .show_separator_line(false)
            .frame(egui::Frame {
                stroke: egui::Stroke::NONE,
                ..Default::default()
            })
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    let available_width = ui.available_width();

                    for (population, color, name) in segments.iter() {
                        let share = *population as f32 / total_ants as f32;
                        let (rect, _) = ui.allocate_exact_size(
                            egui::Vec2::new(available_width * share, bar_height),
                            egui::Sense::hover(),
                        );
                        ui.painter().rect_filled(rect, 0.0, *color);

                        let text = format!("{} ({} ants)", name, population);
                        let font_id = egui::FontId::default();
                        let text_width = ui
                            .painter()
                            .layout_no_wrap(text.clone(), font_id.clone(), egui::Color32::WHITE)
                            .size()
                            .x;

                        if text_width <= rect.width() {
                            ui.painter().text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                text,
                                font_id,
                                egui::Color32::WHITE,
                            );
                        }
                    }
                });
            });

        bar_height
    }
}
