use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// OpenWeather API key; `None` means the app serves mock data.
    pub api_key: Option<String>,

    /// Weather API base URL
    pub api_base_url: String,

    /// Measurement units requested from the API
    pub units: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Minimum horizontal travel (px) for a touch gesture to count as a swipe
    pub swipe_threshold_px: f64,

    /// Spread applied around the current temperature when a record carries
    /// no explicit min/max range
    pub current_range_spread: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            units: "metric".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            swipe_threshold_px: 50.0,
            current_range_spread: 5.0,
        }
    }
}

impl AppSettings {
    /// Create settings from the window environment, with localStorage
    /// overrides under `skycast_*` keys.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            // Detect if running in development mode
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_key)) = storage.get_item("skycast_api_key") {
                    if !api_key.is_empty() {
                        settings.api_key = Some(api_key);
                    }
                }

                if let Ok(Some(base_url)) = storage.get_item("skycast_api_base_url") {
                    settings.api_base_url = base_url;
                }

                if let Ok(Some(units)) = storage.get_item("skycast_units") {
                    settings.units = units;
                }

                if let Ok(Some(log_level)) = storage.get_item("skycast_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }

                if let Ok(Some(threshold)) = storage.get_item("skycast_swipe_threshold_px") {
                    if let Ok(value) = threshold.parse::<f64>() {
                        settings.swipe_threshold_px = value;
                    }
                }

                if let Ok(Some(spread)) = storage.get_item("skycast_current_range_spread") {
                    if let Ok(value) = spread.parse::<f64>() {
                        settings.current_range_spread = value;
                    }
                }
            }
        }

        settings
    }

    /// True when the app should fall back to generated mock data.
    pub fn use_mock_data(&self) -> bool {
        self.api_key.is_none()
    }

    /// Full API URL for an endpoint path such as `/weather?...`.
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings from the environment; call once at startup.
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_mock_data() {
        let settings = AppSettings::default();
        assert!(settings.use_mock_data());
        assert_eq!(settings.swipe_threshold_px, 50.0);
    }

    #[test]
    fn api_url_joins_base_and_endpoint() {
        let settings = AppSettings::default();
        assert_eq!(
            settings.api_url("/weather?lat=0&lon=0"),
            "https://api.openweathermap.org/data/2.5/weather?lat=0&lon=0"
        );
    }
}
