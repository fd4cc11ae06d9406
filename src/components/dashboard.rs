use yew::prelude::*;

use super::{Analytics, Drivers, MainLayout, Map, OrdersPanel};
use crate::models::{Savings, UserProfile};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    #[prop_or_default]
    pub user: Option<UserProfile>,
    pub on_logout: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let savings = use_state(|| None::<Savings>);
    let on_savings = {
        let savings = savings.clone();
        Callback::from(move |latest: Option<Savings>| savings.set(latest))
    };

    html! {
        <MainLayout user={props.user.clone()} on_logout={props.on_logout.clone()}>
            <OrdersPanel />
            <Map {on_savings} />
            <div class="side-by-side">
                <Drivers />
                <Analytics savings={*savings} />
            </div>
        </MainLayout>
    }
}
