use yew::prelude::*;

mod api_client;
mod common;
mod components;
mod constants;
mod hooks;
mod mock_data;
pub mod settings;

use api_client::{CityWeather, WeatherClient};
use common::error::ErrorDisplay;
use common::loading::Loading;
use components::carousel::Carousel;
use components::weather_card::WeatherCard;
use constants::CITIES;
use hooks::FetchState;

#[function_component(App)]
pub fn app() -> Html {
    let weather = use_state(|| FetchState::<Vec<CityWeather>>::Loading);
    let in_flight = use_mut_ref(|| false);
    let client = use_state(WeatherClient::new);

    let load = {
        let weather = weather.clone();
        let in_flight = in_flight.clone();
        let client = client.clone();

        Callback::from(move |_: ()| {
            if *in_flight.borrow() {
                log::debug!("Weather load already in flight, ignoring");
                return;
            }
            *in_flight.borrow_mut() = true;
            weather.set(FetchState::Loading);

            let weather = weather.clone();
            let in_flight = in_flight.clone();
            let client = (*client).clone();

            wasm_bindgen_futures::spawn_local(async move {
                let config = settings::get_settings();
                let result = if config.use_mock_data() {
                    log::info!("No API key configured, serving mock weather data");
                    Ok(mock_data::get_mock_weather())
                } else {
                    client.fetch_all_cities(&CITIES).await
                };

                match result {
                    Ok(data) => {
                        log::info!("Loaded weather for {} cities", data.len());
                        weather.set(FetchState::Success(data));
                    }
                    Err(err) => {
                        log::error!("Error loading weather data: {}", err);
                        weather.set(FetchState::Error(err));
                    }
                }
                *in_flight.borrow_mut() = false;
            });
        })
    };

    // Load on mount.
    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    let on_retry = {
        let load = load.clone();
        Callback::from(move |_: ()| load.emit(()))
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Skycast"}</h1>
            </header>
            <main class="cities-carousel">
                {match &*weather {
                    FetchState::Loading => html! { <Loading /> },
                    FetchState::Error(err) => html! {
                        <ErrorDisplay message={err.clone()} on_retry={on_retry} />
                    },
                    FetchState::Success(cities) => html! {
                        <Carousel labels={cities.iter().map(|c| c.city.clone()).collect::<Vec<_>>()}>
                            { for cities.iter().enumerate().map(|(index, city)| html! {
                                <WeatherCard data={city.clone()} card_index={index} />
                            })}
                        </Carousel>
                    },
                }}
            </main>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let config = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));

    log::info!("=== Skycast starting ===");
    log::debug!("Settings: {:?}", config);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
