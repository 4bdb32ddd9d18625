use std::path::PathBuf;

use crate::plotter::PlotStyle;

/// File read when no other input is configured.
pub const DEFAULT_INPUT: &str = "output.csv";

/// Run configuration. Compile-time defaults only.
#[derive(Debug, Clone)]
pub struct Config {
    /// Delimited table to plot.
    pub input: PathBuf,
    /// Initial window size in logical pixels (8 × 5 inches at 100 dpi).
    pub window_size: [f32; 2],
    pub style: PlotStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            window_size: [800.0, 500.0],
            style: PlotStyle::default(),
        }
    }
}
