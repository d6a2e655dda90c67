//! Shared value-to-pixel mapping for both temperature curves.

/// Fixed chart canvas, sized to fit inside a weather card.
pub const CANVAS_WIDTH: f64 = 340.0;
pub const CANVAS_HEIGHT: f64 = 120.0;

pub const PAD_TOP: f64 = 20.0;
pub const PAD_RIGHT: f64 = 20.0;
pub const PAD_BOTTOM: f64 = 30.0;
pub const PAD_LEFT: f64 = 20.0;

/// Margin added on each side of the combined value range so curves never
/// touch the plot's top or bottom edge.
pub const RANGE_MARGIN: f64 = 2.0;

/// Maps temperature values and day indices to canvas pixels. Derived once
/// per render from the combined pool of maxima and minima and owned by
/// that render invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleMapping {
    value_min: f64,
    value_max: f64,
    step_x: f64,
}

impl ScaleMapping {
    /// Builds the mapping from all values of both sequences. Returns `None`
    /// for an empty pool; the composer renders a placeholder instead.
    pub fn from_pool(pool: impl IntoIterator<Item = f64>, len: usize) -> Option<Self> {
        let mut bounds: Option<(f64, f64)> = None;
        for value in pool {
            bounds = Some(match bounds {
                None => (value, value),
                Some((lo, hi)) => (lo.min(value), hi.max(value)),
            });
        }
        let (lo, hi) = bounds?;
        Some(Self {
            value_min: lo - RANGE_MARGIN,
            value_max: hi + RANGE_MARGIN,
            step_x: plot_width() / (len.saturating_sub(1).max(1)) as f64,
        })
    }

    pub fn value_min(&self) -> f64 {
        self.value_min
    }

    pub fn value_max(&self) -> f64 {
        self.value_max
    }

    /// Uniform horizontal spacing between adjacent day indices.
    pub fn step_x(&self) -> f64 {
        self.step_x
    }

    /// Horizontal pixel for day index `i`.
    pub fn x(&self, index: usize) -> f64 {
        PAD_LEFT + index as f64 * self.step_x
    }

    /// Vertical pixel for temperature `value`; higher temperatures map to
    /// smaller y. A degenerate all-equal pool maps everything to mid-plot.
    pub fn y(&self, value: f64) -> f64 {
        let range = self.value_max - self.value_min;
        let normalized = if range == 0.0 {
            0.5
        } else {
            (value - self.value_min) / range
        };
        plot_bottom() - normalized * plot_height()
    }
}

pub fn plot_width() -> f64 {
    CANVAS_WIDTH - PAD_LEFT - PAD_RIGHT
}

pub fn plot_height() -> f64 {
    CANVAS_HEIGHT - PAD_TOP - PAD_BOTTOM
}

pub fn plot_bottom() -> f64 {
    CANVAS_HEIGHT - PAD_BOTTOM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_carries_two_unit_margin_each_side() {
        let scale = ScaleMapping::from_pool([25.0, 27.0, 22.0, 15.0, 16.0, 14.0], 3).unwrap();
        assert_eq!(scale.value_min(), 12.0);
        assert_eq!(scale.value_max(), 29.0);
        assert!(scale.value_max() - scale.value_min() >= 2.0 * RANGE_MARGIN);
    }

    #[test]
    fn horizontal_positions_are_evenly_spaced() {
        let scale = ScaleMapping::from_pool([10.0, 20.0], 7).unwrap();
        let spacing = scale.x(1) - scale.x(0);
        for i in 1..6 {
            assert_eq!(scale.x(i + 1) - scale.x(i), spacing);
        }
        assert_eq!(scale.x(0), PAD_LEFT);
        assert_eq!(scale.x(6), CANVAS_WIDTH - PAD_RIGHT);
    }

    #[test]
    fn single_point_does_not_divide_by_zero() {
        let scale = ScaleMapping::from_pool([18.0], 1).unwrap();
        assert!(scale.step_x().is_finite());
        assert_eq!(scale.step_x(), plot_width());
        assert_eq!(scale.x(0), PAD_LEFT);
    }

    #[test]
    fn vertical_mapping_is_monotonic() {
        let scale = ScaleMapping::from_pool([5.0, 30.0], 4).unwrap();
        assert!(scale.y(30.0) < scale.y(20.0));
        assert!(scale.y(20.0) < scale.y(5.0));
        // Margin keeps the extremes off the plot edges.
        assert!(scale.y(30.0) > PAD_TOP);
        assert!(scale.y(5.0) < plot_bottom());
    }

    #[test]
    fn all_equal_values_map_to_mid_plot() {
        let scale = ScaleMapping::from_pool([21.0, 21.0, 21.0], 3).unwrap();
        let mid = plot_bottom() - 0.5 * plot_height();
        assert_eq!(scale.y(21.0), mid);
        assert!(scale.y(21.0).is_finite());
    }

    #[test]
    fn empty_pool_yields_no_mapping() {
        assert!(ScaleMapping::from_pool([], 0).is_none());
    }

    #[test]
    fn worked_example_step() {
        // Pool from [{25,15},{27,16},{22,14}]: step = 300 / 2 = 150.
        let scale = ScaleMapping::from_pool([25.0, 27.0, 22.0, 15.0, 16.0, 14.0], 3).unwrap();
        assert_eq!(scale.step_x(), 150.0);
        assert_eq!(scale.x(1), 170.0);
        assert_eq!(scale.x(2), 320.0);
    }
}
