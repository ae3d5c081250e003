use new_egui_macroquad::egui;

/// How an info dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Dismissed,
    ResetRequested,
}

/// Centered modal message with an OK button and an optional reset button.
pub struct DialogPopup {
    pub title: String,
    pub message: String,
    pub offer_reset: bool,
    pub result: Option<DialogResult>,
}

impl DialogPopup {
    pub fn new_info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            offer_reset: false,
            result: None,
        }
    }

    pub fn with_reset(mut self) -> Self {
        self.offer_reset = true;
        self
    }

    /// Draws the dialog. Returns false once it has been closed.
    pub fn draw(&mut self, ctx: &egui::Context) -> bool {
        if self.result.is_some() {
            return false;
        }

        egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&self.message);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        self.result = Some(DialogResult::Dismissed);
                    }
                    if self.offer_reset && ui.button("Reset").clicked() {
                        self.result = Some(DialogResult::ResetRequested);
                    }
                });
            });

        self.result.is_none()
    }
}
