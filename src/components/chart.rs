//! Embeds a composed [`chart::ChartDocument`] as inline SVG.

use chart::compose::{MARKER_RADIUS, MAX_SERIES_COLOR, MIN_SERIES_COLOR, Marker};
use chart::{ChartDocument, DailyRecord, GradientIds, TemperatureChart, render_temperature_chart};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TemperatureChartProps {
    pub forecast: Vec<DailyRecord>,
    /// Seed for the gradient-id counter; each card passes its own index so
    /// charts coexisting in the document never share definition ids.
    pub chart_seq: u64,
}

#[function_component(TemperatureChartView)]
pub fn temperature_chart_view(props: &TemperatureChartProps) -> Html {
    let mut ids = GradientIds::starting_at(props.chart_seq);
    match render_temperature_chart(&props.forecast, &mut ids) {
        ChartDocument::Placeholder { message } => html! {
            <div class="temperature-chart">
                <p class="chart-error">{message}</p>
            </div>
        },
        ChartDocument::Chart(chart) => html! {
            <div class="temperature-chart">
                { svg_for(&chart) }
            </div>
        },
    }
}

fn svg_for(chart: &TemperatureChart) -> Html {
    let gradient_fill = format!("url(#{})", chart.gradient_id);
    html! {
        <svg
            width={chart.width.to_string()}
            height={chart.height.to_string()}
            viewBox={format!("0 0 {} {}", chart.width, chart.height)}
            class="temperature-chart-svg"
        >
            <defs>
                <linearGradient id={chart.gradient_id.clone()} x1="0%" y1="0%" x2="0%" y2="100%">
                    <stop offset="0%" stop-color={MAX_SERIES_COLOR} stop-opacity="0.8" />
                    <stop offset="100%" stop-color={MIN_SERIES_COLOR} stop-opacity="0.8" />
                </linearGradient>
            </defs>

            <path d={chart.area.to_svg()} fill={gradient_fill} opacity="0.3" />

            <path
                d={chart.max_line.to_svg()}
                stroke={MAX_SERIES_COLOR}
                stroke-width="3"
                fill="none"
                class="temp-line max-temp"
            />
            <path
                d={chart.min_line.to_svg()}
                stroke={MIN_SERIES_COLOR}
                stroke-width="3"
                fill="none"
                class="temp-line min-temp"
            />

            { for chart.max_markers.iter().map(|m| marker_html(m, MAX_SERIES_COLOR, "max")) }
            { for chart.min_markers.iter().map(|m| marker_html(m, MIN_SERIES_COLOR, "min")) }

            { for chart.day_labels.iter().map(|label| html! {
                <text
                    x={label.x.to_string()}
                    y={label.y.to_string()}
                    text-anchor="middle"
                    class="day-label"
                >
                    {&label.text}
                </text>
            })}
        </svg>
    }
}

fn marker_html(marker: &Marker, color: &'static str, series: &'static str) -> Html {
    html! {
        <>
            <circle
                cx={marker.x.to_string()}
                cy={marker.y.to_string()}
                r={MARKER_RADIUS.to_string()}
                fill={color}
                stroke="white"
                stroke-width="2"
                class={format!("temp-point {series}-point")}
            />
            <text
                x={marker.x.to_string()}
                y={marker.label_y.to_string()}
                text-anchor="middle"
                class={format!("temp-label {series}-label")}
            >
                {format!("{}°", marker.value)}
            </text>
        </>
    }
}
