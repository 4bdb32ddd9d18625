use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Figure – one chart, independent of how it is shown
// ---------------------------------------------------------------------------

/// Everything needed to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub series: Vec<LineSeries>,
}

/// A single line drawn on a figure, also its legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub width: f32,
}

impl Figure {
    /// Legend labels in drawing order.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }
}

impl LineSeries {
    /// Runs of consecutive finite points. A `NaN` or infinite coordinate
    /// breaks the line instead of being joined across.
    pub fn segments(&self) -> impl Iterator<Item = &[[f64; 2]]> + '_ {
        self.points
            .split(|[x, y]| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: Vec<[f64; 2]>) -> LineSeries {
        LineSeries {
            label: "f".into(),
            points,
            color: Color32::BLUE,
            width: 1.0,
        }
    }

    #[test]
    fn finite_points_form_one_segment() {
        let s = series(vec![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]]);
        let segments: Vec<_> = s.segments().collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 3);
    }

    #[test]
    fn nan_breaks_the_line() {
        let s = series(vec![
            [0.0, f64::NAN],
            [1.0, 0.0],
            [2.0, 1.0],
            [3.0, f64::NAN],
            [4.0, f64::NAN],
            [5.0, 2.0],
            [f64::INFINITY, 3.0],
        ]);
        let segments: Vec<_> = s.segments().collect();
        assert_eq!(segments, [&[[1.0, 0.0], [2.0, 1.0]][..], &[[5.0, 2.0]][..]]);
    }

    #[test]
    fn all_missing_has_no_segments() {
        let s = series(vec![[0.0, f64::NAN], [1.0, f64::NAN]]);
        assert_eq!(s.segments().count(), 0);
    }
}
