//! Daily forecast records and extraction into aligned temperature series.
//!
//! Upstream daily records are heterogeneous: a forecast entry carries a
//! `temp {min,max}` block, while a current-conditions entry carries a
//! `main {temp, temp_min, temp_max}` block, and any field may be absent.
//! This module normalizes them into a strict pair of aligned sequences so
//! the fallback policy lives in exactly one place.

use serde::{Deserialize, Serialize};

/// Maximum number of days a chart renders; extra records are ignored.
pub const MAX_DAYS: usize = 7;

/// Fallback used when a record carries no usable maximum temperature.
pub const FALLBACK_MAX_TEMP: f64 = 20.0;

/// Fallback used when a record carries no usable minimum temperature.
pub const FALLBACK_MIN_TEMP: f64 = 10.0;

/// Min/max block of a daily forecast entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TempRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// `main` block of a current-conditions style entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
}

/// Weather condition tag attached to a record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Condition {
    pub main: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// One day's forecast as delivered by the data source. Immutable once
/// deserialized; all fields are optional and resolved through the
/// accessors below.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Seconds since epoch for the forecast day.
    pub dt: Option<i64>,
    pub temp: Option<TempRange>,
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

impl DailyRecord {
    /// Daily maximum, resolved first-available-wins:
    /// `temp.max` → `main.temp_max` → `main.temp` → fallback.
    pub fn max_temp(&self) -> f64 {
        self.temp
            .as_ref()
            .and_then(|t| t.max)
            .or_else(|| self.main.as_ref().and_then(|m| m.temp_max))
            .or_else(|| self.main.as_ref().and_then(|m| m.temp))
            .unwrap_or(FALLBACK_MAX_TEMP)
    }

    /// Daily minimum, resolved first-available-wins:
    /// `temp.min` → `main.temp_min` → `main.temp` → fallback.
    pub fn min_temp(&self) -> f64 {
        self.temp
            .as_ref()
            .and_then(|t| t.min)
            .or_else(|| self.main.as_ref().and_then(|m| m.temp_min))
            .or_else(|| self.main.as_ref().and_then(|m| m.temp))
            .unwrap_or(FALLBACK_MIN_TEMP)
    }

    /// Icon code of the first condition tag, if any.
    pub fn icon(&self) -> Option<&str> {
        self.weather.first().and_then(|c| c.icon.as_deref())
    }
}

/// Two aligned sequences of daily maxima and minima, at most [`MAX_DAYS`]
/// long. An empty series is valid and renders as a placeholder downstream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemperatureSeries {
    pub maxima: Vec<f64>,
    pub minima: Vec<f64>,
}

impl TemperatureSeries {
    /// Extracts a series from the first [`MAX_DAYS`] records.
    pub fn from_records(records: &[DailyRecord]) -> Self {
        let days = &records[..records.len().min(MAX_DAYS)];
        Self {
            maxima: days.iter().map(DailyRecord::max_temp).collect(),
            minima: days.iter().map(DailyRecord::min_temp).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.maxima.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maxima.is_empty()
    }

    /// All values of both sequences, for range computation.
    pub fn pool(&self) -> impl Iterator<Item = f64> + '_ {
        self.maxima.iter().chain(self.minima.iter()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast_record(min: f64, max: f64) -> DailyRecord {
        DailyRecord {
            temp: Some(TempRange {
                min: Some(min),
                max: Some(max),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn explicit_temp_block_wins() {
        let record = DailyRecord {
            temp: Some(TempRange {
                min: Some(3.0),
                max: Some(9.0),
            }),
            main: Some(MainReadings {
                temp: Some(99.0),
                temp_min: Some(99.0),
                temp_max: Some(99.0),
            }),
            ..Default::default()
        };
        assert_eq!(record.max_temp(), 9.0);
        assert_eq!(record.min_temp(), 3.0);
    }

    #[test]
    fn main_block_fallback_order() {
        let record = DailyRecord {
            main: Some(MainReadings {
                temp: Some(18.0),
                temp_min: None,
                temp_max: Some(21.0),
            }),
            ..Default::default()
        };
        assert_eq!(record.max_temp(), 21.0);
        // No temp_min, falls through to the single current temperature.
        assert_eq!(record.min_temp(), 18.0);
    }

    #[test]
    fn empty_record_uses_constants() {
        let record = DailyRecord::default();
        assert_eq!(record.max_temp(), FALLBACK_MAX_TEMP);
        assert_eq!(record.min_temp(), FALLBACK_MIN_TEMP);
    }

    #[test]
    fn zero_degrees_is_a_value_not_an_absence() {
        let record = DailyRecord {
            temp: Some(TempRange {
                min: Some(0.0),
                max: Some(0.0),
            }),
            ..Default::default()
        };
        assert_eq!(record.max_temp(), 0.0);
        assert_eq!(record.min_temp(), 0.0);
    }

    #[test]
    fn series_is_capped_at_seven_days() {
        let records: Vec<_> = (0..10)
            .map(|i| forecast_record(i as f64, i as f64 + 10.0))
            .collect();
        let series = TemperatureSeries::from_records(&records);
        assert_eq!(series.len(), MAX_DAYS);
        assert_eq!(series.maxima.len(), series.minima.len());
        assert_eq!(series.maxima[6], 16.0);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = TemperatureSeries::from_records(&[]);
        assert!(series.is_empty());
        assert_eq!(series.pool().count(), 0);
    }

    #[test]
    fn deserializes_onecall_style_json() {
        let json = r#"{"dt": 1700000000, "temp": {"min": 11.2, "max": 19.8},
                       "weather": [{"main": "Clouds", "description": "cloudy", "icon": "02d"}]}"#;
        let record: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.dt, Some(1700000000));
        assert_eq!(record.max_temp(), 19.8);
        assert_eq!(record.icon(), Some("02d"));
    }
}
