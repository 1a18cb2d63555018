use leptos::*;
use leptos::logging::log;
use leptos_router::use_params_map;
use crate::app::use_app_context;
use crate::components::{place_summary::PlaceSummary, reviews_list::ReviewsList};
use crate::routes;

/// Detail page for `/place/:id`.
#[component]
pub fn PlacePage() -> impl IntoView {
    let params = use_params_map();
    let place_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    move || view! { <PlaceView place_id=place_id() /> }
}

/// Renders one place, its reviews and the add-review link.
/// An unknown id renders only the not-found message.
#[component]
pub fn PlaceView(#[prop(into)] place_id: String) -> impl IntoView {
    let ctx = use_app_context();

    let Some(details) = ctx.config.catalog.place_details(&place_id) else {
        log!("[PLACE] No listing for id {:?}", place_id);
        return view! {
            <section id="place-details" data-place-id=place_id>
                <p>{ "Place not found." }</p>
            </section>
        }
        .into_view();
    };

    let id = details.listing.id;
    let authenticated = ctx.authenticated;

    view! {
        <section id="place-details" data-place-id=id.to_string()>
            <PlaceSummary listing=details.listing />
        </section>
        <ReviewsList reviews=details.reviews />
        <a
            id="add-review-cta"
            class="button"
            href=routes::place_review(id)
            style:display=move || if authenticated.get() { "inline-block" } else { "none" }
        >
            { "Add a review" }
        </a>
    }
    .into_view()
}
