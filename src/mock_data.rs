//! Generated weather data used when no API key is configured.

use chart::series::{Condition, DailyRecord, TempRange};

use crate::api_client::{CityWeather, CurrentCondition, CurrentMain, CurrentWeather, Wind};
use crate::constants::CITIES;

const MOCK_CONDITIONS: [(&str, &str, &str); 5] = [
    ("Clear", "sunny", "01d"),
    ("Clouds", "partly cloudy", "02d"),
    ("Rain", "light rain", "09d"),
    ("Clear", "clear sky", "01d"),
    ("Clouds", "few clouds", "02d"),
];

// Jitter bounds for the generated forecast, on top of per-city bases.
const MAX_TEMP_JITTER: f64 = 10.0;
const MIN_TEMP_JITTER: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// One plausible `CityWeather` per fixed city: deterministic per-city base
/// values with random day-to-day jitter in the forecast.
pub fn get_mock_weather() -> Vec<CityWeather> {
    CITIES
        .iter()
        .enumerate()
        .map(|(index, city)| {
            let (main, description, icon) = MOCK_CONDITIONS[index % MOCK_CONDITIONS.len()];
            CityWeather {
                city: city.name.to_string(),
                country: city.country.to_string(),
                current: CurrentWeather {
                    main: CurrentMain {
                        temp: 20.0 + index as f64 * 5.0,
                        feels_like: 22.0 + index as f64 * 5.0,
                        humidity: 65 + index as u32 * 5,
                        pressure: 1013 + index as u32 * 2,
                        temp_min: Some(15.0 + index as f64 * 3.0),
                        temp_max: Some(25.0 + index as f64 * 5.0),
                    },
                    weather: vec![CurrentCondition {
                        main: main.to_string(),
                        description: description.to_string(),
                        icon: icon.to_string(),
                    }],
                    wind: Wind {
                        speed: 3.5 + index as f64 * 0.5,
                    },
                },
                forecast: mock_forecast(index),
            }
        })
        .collect()
}

fn mock_forecast(city_index: usize) -> Vec<DailyRecord> {
    let now = js_sys::Date::now() / 1000.0;
    (0..7)
        .map(|day| {
            let (main, description, icon) = random_condition();
            DailyRecord {
                dt: Some((now + (day + 1) as f64 * SECONDS_PER_DAY) as i64),
                temp: Some(TempRange {
                    max: Some(
                        20.0 + city_index as f64 * 5.0 + js_sys::Math::random() * MAX_TEMP_JITTER,
                    ),
                    min: Some(
                        15.0 + city_index as f64 * 3.0 + js_sys::Math::random() * MIN_TEMP_JITTER,
                    ),
                }),
                main: None,
                weather: vec![Condition {
                    main: Some(main.to_string()),
                    description: Some(description.to_string()),
                    icon: Some(icon.to_string()),
                }],
            }
        })
        .collect()
}

fn random_condition() -> (&'static str, &'static str, &'static str) {
    let index = (js_sys::Math::random() * MOCK_CONDITIONS.len() as f64) as usize;
    MOCK_CONDITIONS[index.min(MOCK_CONDITIONS.len() - 1)]
}
