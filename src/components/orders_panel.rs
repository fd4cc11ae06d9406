// Three counter cards: total, en route, cancelled

use yew::prelude::*;

use crate::hooks::use_orders;
use crate::viewmodels::{OrderCounter, OrdersViewModel};

#[derive(Properties, PartialEq)]
struct CounterCardProps {
    counter: OrderCounter,
    #[prop_or_default]
    error: Option<String>,
}

#[function_component(CounterCard)]
fn counter_card(props: &CounterCardProps) -> Html {
    let value = match (props.counter.value, &props.error) {
        (Some(value), _) => value.to_string(),
        (None, Some(_)) => "—".to_string(),
        (None, None) => "…".to_string(),
    };

    html! {
        <div class="order-card">
            <h3 class="order-label">{props.counter.label}</h3>
            <p class="order-value">{value}</p>
            {
                if let Some(error) = &props.error {
                    html! { <span class="error">{error.clone()}</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(OrdersPanel)]
pub fn orders_panel() -> Html {
    let orders = use_orders();
    let error = orders.error().map(str::to_string);

    html! {
        <section class="orders">
            {
                for OrdersViewModel::counters(&orders).into_iter().map(|counter| html! {
                    <CounterCard counter={counter} error={error.clone()} />
                })
            }
        </section>
    }
}
