use yew::prelude::*;

use crate::utils::APP_NAME;

const FOOTER_LINKS: [&str; 4] = ["User Guide", "IT Support", "System Status", "Feedback"];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-logo">
                <img src="logo.png" class="logo" alt={APP_NAME} />
                <h2 class="app-name">{APP_NAME}</h2>
            </div>
            <nav class="footer-links">
                { for FOOTER_LINKS.iter().map(|label| html! { <a>{*label}</a> }) }
            </nav>
            <div class="confidential-notice">
                <h4>{"Confidential & Proprietary - For Internal Use Only"}</h4>
            </div>
        </footer>
    }
}
