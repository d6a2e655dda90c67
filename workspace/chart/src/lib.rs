//! Pure construction of 7-day temperature trend charts.
//!
//! Turns a sparse sequence of daily forecast records into an immutable
//! chart description (smoothed min/max curves, gradient-filled area,
//! markers and labels on a fixed 340×120 canvas) that the embedding layer
//! renders as SVG. Construction is synchronous, total and free of shared
//! state, so any number of charts can be composed independently.

pub mod compose;
pub mod path;
pub mod scale;
pub mod series;

pub use compose::{ChartDocument, GradientIds, TemperatureChart, render_temperature_chart};
pub use series::{DailyRecord, TemperatureSeries};
