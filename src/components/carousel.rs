use web_sys::{KeyboardEvent, TouchEvent};
use yew::prelude::*;

use crate::components::pagination::PaginationDots;
use crate::settings;

/// Navigation state over a fixed set of cards: a clamped index that never
/// leaves `0..len`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.len == 0 || self.index + 1 >= self.len
    }

    pub fn previous(self) -> Self {
        if self.at_start() {
            self
        } else {
            Self {
                index: self.index - 1,
                ..self
            }
        }
    }

    pub fn next(self) -> Self {
        if self.at_end() {
            self
        } else {
            Self {
                index: self.index + 1,
                ..self
            }
        }
    }

    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.len.saturating_sub(1)),
            ..self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    /// One label per child card, used for dot aria-labels and the
    /// per-city body background.
    pub labels: Vec<String>,
    pub children: Children,
}

/// Swipeable card carousel with button, keyboard and pagination-dot
/// navigation. Each child occupies one full-width slide.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let state = use_state(|| CarouselState::new(props.children.len()));
    let touch_start = use_mut_ref(|| None::<(f64, f64)>);

    // Match the page background to the active city.
    {
        let labels = props.labels.clone();
        use_effect_with(state.index(), move |&index| {
            if let Some(label) = labels.get(index) {
                set_body_class(label);
            }
            || ()
        });
    }

    let on_previous = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.previous()))
    };

    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.next()))
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |index: usize| state.set(state.go_to(index)))
    };

    let on_key_down = {
        let state = state.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowLeft" => state.set(state.previous()),
            "ArrowRight" => state.set(state.next()),
            _ => {}
        })
    };

    let on_touch_start = {
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                *touch_start.borrow_mut() =
                    Some((touch.client_x() as f64, touch.client_y() as f64));
            }
        })
    };

    let on_touch_end = {
        let state = state.clone();
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            let Some((start_x, start_y)) = touch_start.borrow_mut().take() else {
                return;
            };
            let Some(touch) = e.changed_touches().get(0) else {
                return;
            };
            let diff_x = start_x - touch.client_x() as f64;
            let diff_y = start_y - touch.client_y() as f64;

            // Only horizontal-dominant gestures past the threshold count.
            let threshold = settings::get_settings().swipe_threshold_px;
            if diff_x.abs() > diff_y.abs() && diff_x.abs() > threshold {
                if diff_x > 0.0 {
                    state.set(state.next());
                } else {
                    state.set(state.previous());
                }
            }
        })
    };

    let track_style = format!("transform: translateX(-{}%);", state.index() * 100);

    html! {
        <div
            class="carousel-container"
            tabindex="0"
            onkeydown={on_key_down}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
        >
            <div class="carousel-track" style={track_style}>
                { for props.children.iter() }
            </div>

            <button
                class="carousel-nav prev"
                aria-label="Previous city"
                disabled={state.at_start()}
                onclick={on_previous}
            >
                {"‹"}
            </button>
            <button
                class="carousel-nav next"
                aria-label="Next city"
                disabled={state.at_end()}
                onclick={on_next}
            >
                {"›"}
            </button>

            <PaginationDots
                labels={props.labels.clone()}
                active={state.index()}
                on_select={on_select}
            />
        </div>
    }
}

fn set_body_class(city_name: &str) {
    let class = city_name.to_lowercase().replace(' ', "-");
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        body.set_class_name(&class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_stops_at_first_card() {
        let state = CarouselState::new(5);
        assert!(state.at_start());
        assert_eq!(state.previous().index(), 0);
    }

    #[test]
    fn next_stops_at_last_card() {
        let mut state = CarouselState::new(3);
        for _ in 0..10 {
            state = state.next();
        }
        assert_eq!(state.index(), 2);
        assert!(state.at_end());
    }

    #[test]
    fn go_to_clamps_out_of_range_targets() {
        let state = CarouselState::new(5);
        assert_eq!(state.go_to(2).index(), 2);
        assert_eq!(state.go_to(99).index(), 4);
    }

    #[test]
    fn empty_carousel_is_both_start_and_end() {
        let state = CarouselState::new(0);
        assert!(state.at_start());
        assert!(state.at_end());
        assert_eq!(state.next().index(), 0);
    }
}
