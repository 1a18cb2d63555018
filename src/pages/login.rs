use leptos::*;
use leptos::logging::{error, log};
use leptos_router::use_navigate;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use crate::api::{ApiError, AuthApi, Credentials};
use crate::app::use_app_context;
use crate::components::login_form::LoginForm;
use crate::forms::validate_credentials;
use crate::routes;
use crate::session::{Session, SessionError};
use crate::utils::leptos_owner::with_owner_safe;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not store the session token: {0}")]
    Session(#[from] SessionError),
}

/// Exchanges credentials for a token and stores it.
/// Returns the route to continue to.
pub async fn submit_login(
    api: &dyn AuthApi,
    session: &Session,
    credentials: &Credentials,
) -> Result<&'static str, LoginError> {
    let token = api.login(credentials).await?;
    session.set_token(&token)?;
    Ok(routes::HOME)
}

pub fn login_failure_message(err: &LoginError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        "Login failed".to_string()
    } else {
        format!("Login failed: {}", message)
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let owner = Owner::current();
    let (error, set_error) = create_signal(String::new());

    let on_submit = Callback::new(move |(email, password): (String, String)| {
        set_error.set(String::new());

        let credentials = match validate_credentials(&email, &password) {
            Ok(credentials) => credentials,
            Err(err) => {
                set_error.set(err.to_string());
                return;
            }
        };

        let ctx = ctx.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = submit_login(ctx.auth.as_ref(), &ctx.session, &credentials).await;
            with_owner_safe(owner, "login response", move || match result {
                Ok(route) => {
                    log!("[LOGIN] Signed in as {}", credentials.email);
                    ctx.authenticated.set(true);
                    navigate(route, Default::default());
                }
                Err(err) => {
                    error!("[LOGIN] {:?}", err);
                    set_error.set(login_failure_message(&err));
                }
            });
        });
    });

    view! {
        <section class="login">
            <h1>{ "Login" }</h1>
            <LoginForm on_submit=on_submit error=error />
        </section>
    }
}
