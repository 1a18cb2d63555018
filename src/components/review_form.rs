use leptos::ev::SubmitEvent;
use leptos::html::{Select, Textarea};
use leptos::*;
use crate::forms::{validate_review, ReviewDraft};

#[component]
pub fn ReviewForm(place_id: String, #[prop(into)] on_submit: Callback<ReviewDraft>) -> impl IntoView {
    let (error, set_error) = create_signal(String::new());
    let review_ref = create_node_ref::<Textarea>();
    let rating_ref = create_node_ref::<Select>();
    let form_place_id = place_id.clone();

    let submit_review = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        let comment = review_ref.get().map(|el| el.value()).unwrap_or_default();
        let rating = rating_ref.get().map(|el| el.value()).unwrap_or_default();
        match validate_review(&place_id, &comment, &rating) {
            Ok(draft) => on_submit.call(draft),
            Err(err) => set_error.set(err.to_string()),
        }
    };

    view! {
        <form id="review-form" data-place-id=form_place_id on:submit=submit_review>
            <h3>{ "Submit Review" }</h3>
            <label for="review">{ "Your review" }</label>
            <textarea id="review" name="review" placeholder="Write your review here" node_ref=review_ref />
            <label for="rating">{ "Rating (1-5)" }</label>
            <select id="rating" name="rating" node_ref=rating_ref>
                <option value="">{ "Select a rating" }</option>
                {(1..=5).rev().map(|n| view! {
                    <option value=n.to_string()>{ n.to_string() }</option>
                }).collect_view()}
            </select>
            <p id="review-error" class="error" role="alert">{ move || error.get() }</p>
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}
