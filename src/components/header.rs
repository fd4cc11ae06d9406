use yew::prelude::*;

use crate::models::UserProfile;
use crate::utils::APP_NAME;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub user: Option<UserProfile>,
    pub on_logout: Callback<()>,
}

/// Logo, app name and the signed-in user's profile
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let logout_click = props.on_logout.reform(|_: MouseEvent| ());

    html! {
        <header class="header">
            <div class="header-logo">
                <img src="logo.png" class="logo" alt={APP_NAME} />
                <h2 class="app-name">{APP_NAME}</h2>
            </div>
            <div class="user-profile">
                <span class="profile-icon">{"👤"}</span>
                {
                    if let Some(user) = &props.user {
                        html! {
                            <>
                                <span class="profile-name">{user.display_name()}</span>
                                <button type="button" class="btn-logout" onclick={logout_click}>
                                    {"Log out"}
                                </button>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </header>
    }
}
