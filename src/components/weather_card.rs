use chart::compose::WEEKDAY_FALLBACK;
use chrono::{DateTime, Duration, Local};
use yew::prelude::*;

use crate::api_client::CityWeather;
use crate::components::chart::TemperatureChartView;
use crate::constants::weather_icon;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct WeatherCardProps {
    pub data: CityWeather,
    /// Position of the card in the carousel; also seeds the chart's
    /// gradient-id counter.
    pub card_index: usize,
}

#[function_component(WeatherCard)]
pub fn weather_card(props: &WeatherCardProps) -> Html {
    let data = &props.data;
    let current = &data.current;
    let condition = current.weather.first();
    let icon = weather_icon(condition.map(|c| c.icon.as_str()).unwrap_or(""));
    let description = condition.map(|c| c.description.as_str()).unwrap_or("");

    html! {
        <div class="weather-card">
            <div class="weather-card-header">
                <h2 class="city-name">{&data.city}</h2>
                <p class="current-date">{Local::now().format("%A, %B %-d, %Y").to_string()}</p>
            </div>

            <div class="current-weather">
                <span class="weather-icon">{icon}</span>
                <div class="temperature">{format!("{}°", current.main.temp.round())}</div>
                <div class="weather-description">{description}</div>
                <div class="temp-range">{temp_range(data)}</div>
            </div>

            <div class="weather-details">
                <div class="weather-detail">
                    <div class="detail-label">{"Feels like"}</div>
                    <div class="detail-value">{format!("{}°", current.main.feels_like.round())}</div>
                </div>
                <div class="weather-detail">
                    <div class="detail-label">{"Humidity"}</div>
                    <div class="detail-value">{format!("{}%", current.main.humidity)}</div>
                </div>
                <div class="weather-detail">
                    <div class="detail-label">{"Wind"}</div>
                    <div class="detail-value">{format!("{} m/s", current.wind.speed.round())}</div>
                </div>
                <div class="weather-detail">
                    <div class="detail-label">{"Pressure"}</div>
                    <div class="detail-value">{current.main.pressure.to_string()}</div>
                </div>
            </div>

            <TemperatureChartView
                forecast={data.forecast.clone()}
                chart_seq={props.card_index as u64}
            />

            {forecast_strip(data)}
        </div>
    }
}

/// Min/max range line: taken from the first forecast day when present,
/// else from the current record with the configured spread as fallback.
fn temp_range(data: &CityWeather) -> String {
    if let Some(first) = data.forecast.first() {
        return format!("{}°/{}°", first.min_temp().round(), first.max_temp().round());
    }
    let main = &data.current.main;
    let spread = settings::get_settings().current_range_spread;
    let min = main.temp_min.unwrap_or(main.temp - spread);
    let max = main.temp_max.unwrap_or(main.temp + spread);
    format!("{}°/{}°", min.round(), max.round())
}

fn forecast_strip(data: &CityWeather) -> Html {
    if data.forecast.is_empty() {
        return html! {};
    }
    html! {
        <div class="forecast-section">
            <h3 class="forecast-title">{"7-Day Forecast"}</h3>
            <div class="forecast-list">
                { for data.forecast.iter().enumerate().map(|(index, day)| {
                    let label = day
                        .dt
                        .map(format_forecast_day)
                        .unwrap_or_else(|| WEEKDAY_FALLBACK[index % WEEKDAY_FALLBACK.len()].to_string());
                    html! {
                        <div class="forecast-item">
                            <div class="forecast-day">{label}</div>
                            <span class="forecast-icon">
                                {weather_icon(day.icon().unwrap_or(""))}
                            </span>
                            <div class="forecast-temp-high">{format!("{}°", day.max_temp().round())}</div>
                            <div class="forecast-temp-low">{format!("{}°", day.min_temp().round())}</div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

/// "Today" / "Tomorrow" for the next two days, short weekday after that.
fn format_forecast_day(dt: i64) -> String {
    let Some(timestamp) = DateTime::from_timestamp(dt, 0) else {
        return String::new();
    };
    let date = timestamp.with_timezone(&Local).date_naive();
    let today = Local::now().date_naive();
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%a").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_is_today() {
        let now = Local::now().timestamp();
        assert_eq!(format_forecast_day(now), "Today");
    }

    #[test]
    fn next_day_is_tomorrow() {
        let tomorrow = (Local::now() + Duration::days(1)).timestamp();
        assert_eq!(format_forecast_day(tomorrow), "Tomorrow");
    }

    #[test]
    fn later_days_use_short_weekday() {
        let later = (Local::now() + Duration::days(4)).timestamp();
        let label = format_forecast_day(later);
        assert_eq!(label.len(), 3);
        assert!(WEEKDAY_FALLBACK.contains(&label.as_str()));
    }
}
