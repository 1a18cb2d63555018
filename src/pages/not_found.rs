use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="not-found">
            <h1>{ "Page not found." }</h1>
            <a href="/">{ "Back to listings" }</a>
        </section>
    }
}
