use anyhow::{Context, Result};
use eframe::egui::Color32;

use crate::data::model::{Column, Table};
use crate::figure::{Figure, LineSeries};
use crate::surface::PlotSurface;

// ---------------------------------------------------------------------------
// Plot style
// ---------------------------------------------------------------------------

/// Labels and line styling shared by every figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub x_label: String,
    pub y_label: String,
    pub line_color: Color32,
    pub line_width: f32,
    pub grid: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            x_label: "n".to_string(),
            y_label: "Function Value".to_string(),
            line_color: Color32::BLUE,
            line_width: 1.5,
            grid: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Column plotter
// ---------------------------------------------------------------------------

/// Draws every dependent column of a table against the independent one,
/// one figure per column.
pub struct ColumnPlotter {
    style: PlotStyle,
}

impl ColumnPlotter {
    pub fn new(style: PlotStyle) -> Self {
        Self { style }
    }

    /// Build the figure for one dependent column.
    pub fn figure(&self, table: &Table, column: &Column) -> Figure {
        let points = table
            .independent()
            .values
            .iter()
            .zip(&column.values)
            .map(|(&x, &y)| [x, y])
            .collect();

        Figure {
            title: column.name.clone(),
            x_label: self.style.x_label.clone(),
            y_label: self.style.y_label.clone(),
            grid: self.style.grid,
            series: vec![LineSeries {
                label: column.name.clone(),
                points,
                color: self.style.line_color,
                width: self.style.line_width,
            }],
        }
    }

    /// Show one figure per dependent column, in header order. Stops at the
    /// first figure the surface fails to show. Returns the number shown.
    pub fn plot_each_column(&self, table: &Table, surface: &mut impl PlotSurface) -> Result<usize> {
        let mut shown = 0;

        for column in table.dependent() {
            let figure = self.figure(table, column);
            log::debug!("Showing plot of '{}' ({} points)", column.name, column.len());

            if let Err(e) = surface.show(&figure) {
                log::error!("Failed to show plot of '{}': {e:#}", column.name);
                return Err(e).with_context(|| format!("plotting column '{}'", column.name));
            }
            shown += 1;
        }

        Ok(shown)
    }
}

impl Default for ColumnPlotter {
    fn default() -> Self {
        Self::new(PlotStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;
    use crate::surface::testing::RecordingSurface;

    fn example_table() -> Table {
        load_reader("n,f1,f2\n1,2,4\n2,4,8\n3,6,12\n".as_bytes(), b',').unwrap()
    }

    #[test]
    fn one_render_per_dependent_column() {
        let table = example_table();
        let mut surface = RecordingSurface::default();

        let shown = ColumnPlotter::default()
            .plot_each_column(&table, &mut surface)
            .unwrap();

        assert_eq!(shown, 2);
        assert_eq!(surface.titles(), ["f1", "f2"]);
        assert_eq!(surface.shown[0].legend_labels(), ["f1"]);
        assert_eq!(surface.shown[1].legend_labels(), ["f2"]);
    }

    #[test]
    fn figures_carry_axis_labels_grid_and_points() {
        let table = example_table();
        let mut surface = RecordingSurface::default();
        ColumnPlotter::default()
            .plot_each_column(&table, &mut surface)
            .unwrap();

        let figure = &surface.shown[1];
        assert_eq!(figure.x_label, "n");
        assert_eq!(figure.y_label, "Function Value");
        assert!(figure.grid);
        assert_eq!(figure.series.len(), 1);
        assert_eq!(figure.series[0].points, [[1.0, 4.0], [2.0, 8.0], [3.0, 12.0]]);
        assert_eq!(figure.series[0].color, Color32::BLUE);
    }

    #[test]
    fn no_dependent_columns_means_no_renders() {
        let table = load_reader("n\n1\n2\n".as_bytes(), b',').unwrap();
        let mut surface = RecordingSurface::default();

        let shown = ColumnPlotter::default()
            .plot_each_column(&table, &mut surface)
            .unwrap();

        assert_eq!(shown, 0);
        assert!(surface.shown.is_empty());
    }

    #[test]
    fn plotting_twice_gives_the_same_figures() {
        let table = example_table();
        let plotter = ColumnPlotter::default();

        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        plotter.plot_each_column(&table, &mut first).unwrap();
        plotter.plot_each_column(&table, &mut second).unwrap();

        assert_eq!(first.shown, second.shown);
    }

    #[test]
    fn surface_failure_stops_remaining_columns() {
        let table = load_reader("n,a,b,c\n1,2,3,4\n".as_bytes(), b',').unwrap();
        let mut surface = RecordingSurface {
            fail_on: Some(1),
            ..Default::default()
        };

        let err = ColumnPlotter::default()
            .plot_each_column(&table, &mut surface)
            .unwrap_err();

        assert_eq!(surface.titles(), ["a"]);
        assert!(format!("{err:#}").contains("plotting column 'b'"));
    }

    #[test]
    fn custom_style_is_applied() {
        let table = example_table();
        let plotter = ColumnPlotter::new(PlotStyle {
            y_label: "Time (ms)".to_string(),
            line_color: Color32::RED,
            grid: false,
            ..PlotStyle::default()
        });

        let figure = plotter.figure(&table, &table.dependent()[0]);
        assert_eq!(figure.y_label, "Time (ms)");
        assert_eq!(figure.series[0].color, Color32::RED);
        assert!(!figure.grid);
    }
}
