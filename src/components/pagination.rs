use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationDotsProps {
    pub labels: Vec<String>,
    pub active: usize,
    pub on_select: Callback<usize>,
}

/// One dot per carousel card; clicking a dot jumps to that card.
#[function_component(PaginationDots)]
pub fn pagination_dots(props: &PaginationDotsProps) -> Html {
    html! {
        <div class="pagination-dots">
            { for props.labels.iter().enumerate().map(|(index, label)| {
                let on_click = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(index))
                };
                let class = if index == props.active {
                    "pagination-dot active"
                } else {
                    "pagination-dot"
                };
                html! {
                    <button
                        {class}
                        aria-label={format!("Go to {}", label)}
                        onclick={on_click}
                    />
                }
            })}
        </div>
    }
}
