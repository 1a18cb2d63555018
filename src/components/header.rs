use leptos::*;
use leptos::logging::warn;
use leptos_router::use_navigate;
use crate::app::use_app_context;
use crate::routes;

/// Site header. Shows a login link, or a logout button once a token is stored.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let authenticated = ctx.authenticated;
    let navigate = use_navigate();

    let logout = move |_: ev::MouseEvent| {
        if let Err(err) = ctx.session.logout() {
            warn!("[SESSION] Logout failed: {}", err);
        }
        authenticated.set(ctx.session.is_authenticated());
        navigate(routes::HOME, Default::default());
    };

    view! {
        <header class="site-header">
            <a class="logo" href=routes::HOME>{ "HBnB" }</a>
            <nav>
                <Show
                    when=move || authenticated.get()
                    fallback=|| view! { <a id="login-link" class="login-button" href=routes::LOGIN>{ "Login" }</a> }
                >
                    <button id="logout-button" type="button" on:click=logout.clone()>{ "Logout" }</button>
                </Show>
            </nav>
        </header>
    }
}
