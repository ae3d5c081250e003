use crate::engine::ScentOverlay;
use crate::ui::BASE_PADDING;
use new_egui_macroquad::egui;

/// Visual options panel component
pub struct VisualOptionsPanel {
    show_visual_options: bool,
    pub scent_overlay: ScentOverlay,
}

impl VisualOptionsPanel {
    pub fn new(show_scent: bool) -> Self {
        Self {
            show_visual_options: false,
            scent_overlay: if show_scent {
                ScentOverlay::Food
            } else {
                ScentOverlay::Hidden
            },
        }
    }

    /// Toggle visual options panel visibility
    pub fn toggle(&mut self) {
        self.show_visual_options = !self.show_visual_options;
    }

    /// Steps through hidden -> food -> nest -> hidden.
    pub fn cycle_overlay(&mut self) {
        self.scent_overlay = match self.scent_overlay {
            ScentOverlay::Hidden => ScentOverlay::Food,
            ScentOverlay::Food => ScentOverlay::Nest,
            ScentOverlay::Nest => ScentOverlay::Hidden,
        };
    }

    /// Draw the visual options panel
    pub fn draw(&mut self, egui_ctx: &egui::Context) {
        if !self.show_visual_options {
            return;
        }
        egui::Window::new("Visual Options")
            .resizable(false)
            .collapsible(true)
            .default_pos(egui::pos2(32.0, 260.0))
            .show(egui_ctx, |ui| {
                ui.heading("Scent");
                ui.horizontal(|ui| {
                    for (mode, label) in [
                        (ScentOverlay::Hidden, "Hide"),
                        (ScentOverlay::Food, "Food trails"),
                        (ScentOverlay::Nest, "Nest trails"),
                    ] {
                        if ui
                            .selectable_label(self.scent_overlay == mode, label)
                            .clicked()
                        {
                            self.scent_overlay = mode;
                        }
                    }
                });
                ui.add_space(BASE_PADDING);
            });
    }
}
