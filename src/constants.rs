//! Fixed city roster and weather-icon mapping.

/// A city the dashboard always shows, in carousel order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lon: f64,
}

pub const CITIES: [City; 5] = [
    City {
        name: "London",
        country: "GB",
        lat: 51.5074,
        lon: -0.1278,
    },
    City {
        name: "Milan",
        country: "IT",
        lat: 45.4642,
        lon: 9.19,
    },
    City {
        name: "Bangkok",
        country: "TH",
        lat: 13.7563,
        lon: 100.5018,
    },
    City {
        name: "Los Angeles",
        country: "US",
        lat: 34.0522,
        lon: -118.2437,
    },
    City {
        name: "Nairobi",
        country: "KE",
        lat: -1.2921,
        lon: 36.8219,
    },
];

/// Emoji for an OpenWeather icon code, with a generic default for codes we
/// do not recognize.
pub fn weather_icon(code: &str) -> &'static str {
    match code {
        "01d" => "☀️",
        "01n" => "🌙",
        "02d" => "⛅",
        "02n" | "03d" | "03n" | "04d" | "04n" => "☁️",
        "09d" | "09n" | "10n" => "🌧️",
        "10d" => "🌦️",
        "11d" | "11n" => "⛈️",
        "13d" | "13n" => "❄️",
        "50d" | "50n" => "🌫️",
        _ => "🌤️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_specific_icons() {
        assert_eq!(weather_icon("01d"), "☀️");
        assert_eq!(weather_icon("09n"), "🌧️");
        assert_eq!(weather_icon("13d"), "❄️");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(weather_icon("99x"), "🌤️");
        assert_eq!(weather_icon(""), "🌤️");
    }

    #[test]
    fn carousel_has_five_cities() {
        assert_eq!(CITIES.len(), 5);
        assert_eq!(CITIES[0].name, "London");
    }
}
