use leptos::*;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    let body = if reviews.is_empty() {
        view! { <p class="muted">{ "No reviews yet." }</p> }.into_view()
    } else {
        reviews.into_iter().map(|review| {
            view! {
                <article class="review-card">
                    <p>{ review.comment }</p>
                    <p class="muted">{ format!("— {}", review.user) }</p>
                    <p class="rating">{ format!("Rating: {}/5", review.rating) }</p>
                </article>
            }
        }).collect_view()
    };

    view! {
        <section id="reviews">
            <h3>{ "Reviews" }</h3>
            { body }
        </section>
    }
}
