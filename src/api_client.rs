//! Weather API client: current conditions plus the 7-day daily forecast per
//! city, with a per-session result cache so each city is fetched once.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chart::DailyRecord;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::constants::City;
use crate::settings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentCondition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Current-conditions block of a city, matching the `/weather` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub main: CurrentMain,
    #[serde(default)]
    pub weather: Vec<CurrentCondition>,
    pub wind: Wind,
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    #[serde(default)]
    daily: Vec<DailyRecord>,
}

/// Everything one carousel card needs for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityWeather {
    pub city: String,
    pub country: String,
    pub current: CurrentWeather,
    pub forecast: Vec<DailyRecord>,
}

/// Cheap-to-clone client with a shared result cache keyed by
/// `"{name}-{country}"`.
#[derive(Clone, Default)]
pub struct WeatherClient {
    cache: Rc<RefCell<HashMap<String, CityWeather>>>,
}

impl WeatherClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches current weather and the next seven forecast days for one
    /// city, serving repeats from the cache.
    pub async fn fetch_city_weather(&self, city: &City) -> Result<CityWeather, String> {
        let cache_key = format!("{}-{}", city.name, city.country);
        if let Some(cached) = self.cache.borrow().get(&cache_key) {
            log::debug!("Cache hit for {}", cache_key);
            return Ok(cached.clone());
        }

        let config = settings::get_settings();
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| "No API key configured".to_string())?;

        log::debug!("Fetching weather for {}", city.name);
        let current: CurrentWeather = get_json(&config.api_url(&format!(
            "/weather?lat={}&lon={}&appid={}&units={}",
            city.lat, city.lon, api_key, config.units
        )))
        .await
        .map_err(|e| format!("Failed to fetch weather for {}: {}", city.name, e))?;

        let one_call: OneCallResponse = get_json(&config.api_url(&format!(
            "/onecall?lat={}&lon={}&appid={}&units={}&exclude=minutely,hourly,alerts",
            city.lat, city.lon, api_key, config.units
        )))
        .await
        .map_err(|e| format!("Failed to fetch forecast for {}: {}", city.name, e))?;

        let result = CityWeather {
            city: city.name.to_string(),
            country: city.country.to_string(),
            current,
            // Today is already on the card; chart the next seven days.
            forecast: one_call.daily.into_iter().skip(1).take(7).collect(),
        };

        self.cache.borrow_mut().insert(cache_key, result.clone());
        log::info!("Fetched weather for {}", city.name);
        Ok(result)
    }

    /// Fetches every city in order; the first failure aborts the load and
    /// surfaces as the single aggregate error the caller retries from.
    pub async fn fetch_all_cities(&self, cities: &[City]) -> Result<Vec<CityWeather>, String> {
        let mut results = Vec::with_capacity(cities.len());
        for city in cities {
            results.push(self.fetch_city_weather(city).await?);
        }
        Ok(results)
    }
}

async fn get_json<T>(url: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", url, error_msg);
        return Err(error_msg);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
