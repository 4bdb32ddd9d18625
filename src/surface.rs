use anyhow::{anyhow, Result};
use eframe::egui;

use crate::app::FigureWindow;
use crate::figure::Figure;

/// Somewhere a figure can be shown.
pub trait PlotSurface {
    /// Show one figure. Returns once the figure is done being displayed.
    fn show(&mut self, figure: &Figure) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Native window surface
// ---------------------------------------------------------------------------

/// Opens one native window per figure and blocks until it is closed.
pub struct WindowSurface {
    size: [f32; 2],
}

impl WindowSurface {
    pub fn new(size: [f32; 2]) -> Self {
        Self { size }
    }
}

impl PlotSurface for WindowSurface {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(figure.title.clone())
                .with_inner_size(self.size)
                .with_min_inner_size([300.0, 200.0]),
            // Return from run_native when the window closes.
            run_and_return: true,
            ..Default::default()
        };

        let window = FigureWindow::new(figure.clone());

        eframe::run_native(
            &figure.title,
            options,
            Box::new(move |_cc| Ok(Box::new(window))),
        )
        .map_err(|e| anyhow!("failed to display plot '{}': {e}", figure.title))
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records every figure instead of drawing it. Optionally fails on the
    /// n-th call.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub shown: Vec<Figure>,
        pub fail_on: Option<usize>,
    }

    impl PlotSurface for RecordingSurface {
        fn show(&mut self, figure: &Figure) -> Result<()> {
            if self.fail_on == Some(self.shown.len()) {
                anyhow::bail!("display went away");
            }
            self.shown.push(figure.clone());
            Ok(())
        }
    }

    impl RecordingSurface {
        pub fn titles(&self) -> Vec<&str> {
            self.shown.iter().map(|f| f.title.as_str()).collect()
        }
    }
}
