use yew::prelude::*;

use super::{Footer, Header};
use crate::models::UserProfile;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or_default]
    pub user: Option<UserProfile>,
    pub on_logout: Callback<()>,
    pub children: Children,
}

/// Header and footer around the page content
#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    html! {
        <div class="layout">
            <Header user={props.user.clone()} on_logout={props.on_logout.clone()} />
            <main class="main-content">
                {props.children.clone()}
            </main>
            <Footer />
        </div>
    }
}
