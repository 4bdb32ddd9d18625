use eframe::egui;

use crate::figure::Figure;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// A window showing a single figure. Closing it (or pressing `q`) ends the
/// current display call.
pub struct FigureWindow {
    pub figure: Figure,
}

impl FigureWindow {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_plot(ui, &self.figure);
        });
    }
}
