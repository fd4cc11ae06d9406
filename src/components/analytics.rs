use yew::prelude::*;

use crate::models::Savings;

#[derive(Properties, PartialEq)]
pub struct AnalyticsProps {
    /// Savings of the last optimization, if any
    #[prop_or_default]
    pub savings: Option<Savings>,
}

#[function_component(Analytics)]
pub fn analytics(props: &AnalyticsProps) -> Html {
    let (distance, fuel) = match props.savings {
        Some(s) => (format!("{} km", s.distance_km), format!("{} L", s.fuel_l)),
        None => ("—".to_string(), "—".to_string()),
    };

    html! {
        <section class="analytics">
            <h3 class="distance">{"🛣️ Distance Saved: "}{distance}</h3>
            <p class="fuel">{"⛽ Fuel Saved: "}{fuel}</p>
        </section>
    }
}
