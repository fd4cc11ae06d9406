use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::Footer;
use crate::hooks::use_login;
use crate::models::Session;
use crate::utils::APP_NAME;

/// Seeded accounts on the demo backend
const DEMO_ACCOUNTS: [(&str, &str); 3] = [
    ("Dispatcher", "dispatcher@greenwells.com"),
    ("Manager", "manager@greenwells.com"),
    ("Admin", "admin@greenwells.com"),
];
const DEMO_PASSWORD: &str = "greenwells123";

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_logged_in: Callback<Session>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let login = use_login(props.on_logged_in.clone());

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let submit = login.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                submit.emit((email_input.value(), password_input.value()));
            }
        })
    };

    let state = &*login.state;
    let field_error = |message: Option<&'static str>| match message {
        Some(text) => html! { <span class="error">{text}</span> },
        None => html! {},
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <form class="login-form" onsubmit={on_submit} novalidate=true>
                    <div class="login-header">
                        <img src="logo.png" class="logo" alt={APP_NAME} />
                        <h2 class="company-name">{APP_NAME}</h2>
                    </div>

                    <div class="extra-info">
                        <h3>{"Welcome Back!!"}</h3>
                        <p>{"Enter your details below:"}</p>
                    </div>

                    <div class="form-content">
                        <label for="email">{"Your Email:"}</label>
                        <input type="email" class="input-field" id="email" ref={email_ref} />
                        { field_error(state.errors.email) }

                        <label for="password">{"Your Password:"}</label>
                        <input type="password" class="input-field" id="password" ref={password_ref} />
                        { field_error(state.errors.password) }

                        {
                            if let Some(message) = &state.server_error {
                                html! { <span class="error">{message.clone()}</span> }
                            } else {
                                html! {}
                            }
                        }

                        <button class="btn-login" type="submit" disabled={state.submitting}>
                            { if state.submitting { "Signing In..." } else { "Sign In" } }
                        </button>

                        <div class="demo-accounts">
                            <p><strong>{"Demo Accounts:"}</strong></p>
                            {
                                for DEMO_ACCOUNTS.iter().map(|(role, email)| html! {
                                    <p>
                                        <strong>{format!("{}:", role)}</strong>
                                        {format!(" {} / {}", email, DEMO_PASSWORD)}
                                    </p>
                                })
                            }
                        </div>
                    </div>
                </form>
            </div>
            <Footer />
        </div>
    }
}
