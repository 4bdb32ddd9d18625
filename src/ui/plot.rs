use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Figure plot (central panel)
// ---------------------------------------------------------------------------

/// Render a figure: title heading, then the plot filling the rest.
pub fn figure_plot(ui: &mut Ui, figure: &Figure) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(figure.title.as_str());
    });

    Plot::new(("figure_plot", &figure.title))
        .legend(Legend::default())
        .x_axis_label(figure.x_label.as_str())
        .y_axis_label(figure.y_label.as_str())
        .show_grid(figure.grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &figure.series {
                // Each finite run is its own line; sharing a name keeps one
                // legend entry.
                for segment in series.segments() {
                    let points: PlotPoints = segment.iter().copied().collect();

                    let line = Line::new(points)
                        .name(&series.label)
                        .color(series.color)
                        .width(series.width);

                    plot_ui.line(line);
                }
            }
        });
}
