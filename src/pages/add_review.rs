use leptos::*;
use leptos::logging::log;
use leptos_router::{use_navigate, use_params_map};
use crate::app::use_app_context;
use crate::components::review_form::ReviewForm;
use crate::forms::ReviewDraft;
use crate::routes;
use crate::session::Session;

/// What the add-review page does on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewGate {
    /// Storage not inspected yet (server render, before hydration).
    Pending,
    Open,
    Redirect(&'static str),
}

pub fn review_gate(session: &Session) -> ReviewGate {
    if session.is_authenticated() {
        ReviewGate::Open
    } else {
        ReviewGate::Redirect(routes::LOGIN)
    }
}

/// Page for `/place/:id/review`.
#[component]
pub fn AddReviewPage() -> impl IntoView {
    let params = use_params_map();
    let place_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    move || view! { <AddReviewView place_id=place_id() /> }
}

/// Review entry for one place. Anonymous visitors are sent to the login page before
/// the form is rendered or wired up.
#[component]
pub fn AddReviewView(#[prop(into)] place_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let gate = create_rw_signal(ReviewGate::Pending);

    let session = ctx.session.clone();
    let redirect = navigate.clone();
    create_effect(move |_| {
        let decision = review_gate(&session);
        if let ReviewGate::Redirect(to) = decision {
            log!("[REVIEW] No session token, redirecting to {}", to);
            redirect(to, Default::default());
        }
        gate.set(decision);
    });

    let heading = ctx
        .config
        .catalog
        .place_details(&place_id)
        .map(|details| format!("Reviewing: {}", details.listing.name))
        .unwrap_or_else(|| "Add a review".to_string());

    // TODO: POST the draft to /api/v1/reviews/ with the bearer token once the backend accepts it.
    let on_submit = Callback::new(move |draft: ReviewDraft| {
        log!("[REVIEW] Accepted review for place {} (rating {})", draft.place_id, draft.rating);
        let _ = window().alert_with_message("Review submitted. It will be published once reviews are connected to the server.");
        navigate(&routes::place(&draft.place_id), Default::default());
    });

    view! {
        <section class="add-review">
            <h1>{ heading }</h1>
            <Show when=move || gate.get() == ReviewGate::Open>
                <ReviewForm place_id=place_id.clone() on_submit=on_submit />
            </Show>
        </section>
    }
}
