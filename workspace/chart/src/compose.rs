//! Chart composition: orchestrates extraction, scaling and path building
//! into one renderable [`ChartDocument`].
//!
//! Composition is a pure function of the input records and the injected id
//! source; it performs no I/O and shares no state between invocations.

use chrono::DateTime;

use crate::path::{PathCommand, PathGeometry, Point, smooth_path};
use crate::scale::{CANVAS_HEIGHT, CANVAS_WIDTH, PAD_LEFT, PAD_RIGHT, ScaleMapping, plot_bottom};
use crate::series::{DailyRecord, MAX_DAYS, TemperatureSeries};

pub const MAX_SERIES_COLOR: &str = "#ff6b35";
pub const MIN_SERIES_COLOR: &str = "#4fc3f7";
pub const MARKER_RADIUS: f64 = 4.0;

/// Message carried by the placeholder document for an empty series.
pub const NO_DATA_MESSAGE: &str = "No forecast data available";

/// Cyclic weekday labels used when a record has no timestamp.
pub const WEEKDAY_FALLBACK: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// Vertical offsets of value labels relative to their markers, and of the
// day axis labels relative to the canvas bottom.
const MAX_LABEL_OFFSET: f64 = -10.0;
const MIN_LABEL_OFFSET: f64 = 20.0;
const DAY_LABEL_BASELINE: f64 = CANVAS_HEIGHT - 5.0;

/// Injected source of gradient definition ids. Charts composed into the
/// same document must not share gradient ids, so the caller seeds one
/// source per render pass (e.g. with the card index) and composition stays
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct GradientIds {
    next: u64,
}

impl GradientIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("temperatureGradient{}", self.next);
        self.next += 1;
        id
    }
}

/// A marker dot plus its rounded value label.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    /// Baseline of the value label, above max markers and below min markers.
    pub label_y: f64,
    /// Rounded integer temperature shown next to the marker.
    pub value: i32,
}

/// A short weekday label on the bottom axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// The fully composed chart: background area, two smoothed curves, markers
/// and labels on a fixed canvas. Created fresh per render and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureChart {
    pub width: f64,
    pub height: f64,
    pub gradient_id: String,
    /// Minima curve closed down to the plot's bottom edge, filled with the
    /// scoped gradient.
    pub area: PathGeometry,
    pub max_line: PathGeometry,
    pub min_line: PathGeometry,
    pub max_markers: Vec<Marker>,
    pub min_markers: Vec<Marker>,
    pub day_labels: Vec<DayLabel>,
}

/// Output of one chart render: either a full chart or a "no data"
/// placeholder. Total over all inputs; composing never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartDocument {
    Placeholder { message: String },
    Chart(TemperatureChart),
}

/// Composes a chart from up to [`MAX_DAYS`] daily records. Malformed
/// records degrade through the extraction fallbacks; an empty input yields
/// the placeholder document.
pub fn render_temperature_chart(records: &[DailyRecord], ids: &mut GradientIds) -> ChartDocument {
    let series = TemperatureSeries::from_records(records);
    let Some(scale) = ScaleMapping::from_pool(series.pool(), series.len()) else {
        return ChartDocument::Placeholder {
            message: NO_DATA_MESSAGE.to_string(),
        };
    };

    let max_points = plot_points(&series.maxima, &scale);
    let min_points = plot_points(&series.minima, &scale);

    let max_line = smooth_path(&max_points, scale.step_x());
    let min_line = smooth_path(&min_points, scale.step_x());

    ChartDocument::Chart(TemperatureChart {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        gradient_id: ids.next_id(),
        area: close_to_bottom(min_line.clone()),
        max_markers: markers(&series.maxima, &max_points, MAX_LABEL_OFFSET),
        min_markers: markers(&series.minima, &min_points, MIN_LABEL_OFFSET),
        day_labels: day_labels(records, &scale),
        max_line,
        min_line,
    })
}

fn plot_points(values: &[f64], scale: &ScaleMapping) -> Vec<Point> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point::new(scale.x(i), scale.y(v)))
        .collect()
}

/// Extends a curve into a fill region bounded by the plot's bottom edge.
fn close_to_bottom(mut path: PathGeometry) -> PathGeometry {
    if path.is_empty() {
        return path;
    }
    path.push(PathCommand::LineTo(Point::new(
        CANVAS_WIDTH - PAD_RIGHT,
        plot_bottom(),
    )));
    path.push(PathCommand::LineTo(Point::new(PAD_LEFT, plot_bottom())));
    path.push(PathCommand::Close);
    path
}

fn markers(values: &[f64], points: &[Point], label_offset: f64) -> Vec<Marker> {
    values
        .iter()
        .zip(points)
        .map(|(&value, point)| Marker {
            x: point.x,
            y: point.y,
            label_y: point.y + label_offset,
            value: value.round() as i32,
        })
        .collect()
}

fn day_labels(records: &[DailyRecord], scale: &ScaleMapping) -> Vec<DayLabel> {
    records
        .iter()
        .take(MAX_DAYS)
        .enumerate()
        .map(|(i, record)| DayLabel {
            x: scale.x(i),
            y: DAY_LABEL_BASELINE,
            text: weekday_label(record.dt, i),
        })
        .collect()
}

/// Short weekday name from the record timestamp, else the cyclic fallback
/// keyed by index.
pub fn weekday_label(dt: Option<i64>, index: usize) -> String {
    dt.and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|date| date.format("%a").to_string())
        .unwrap_or_else(|| WEEKDAY_FALLBACK[index % WEEKDAY_FALLBACK.len()].to_string())
}
