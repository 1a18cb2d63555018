/// Component to display a list of listings.
/// Each entry shows the name and nightly price and links to the place's detail page.
use leptos::*;
use crate::models::listing::Listing;
use crate::routes;

#[component]
pub fn ListingsList(#[prop(into)] listings: Signal<Vec<Listing>>) -> impl IntoView {
    view! {
        <section id="places-list">
            <For
                each=move || listings.get()
                key=|listing| listing.id
                children=move |listing| view! { <ListingCard listing=listing /> }
            />
        </section>
    }
}

#[component]
pub fn ListingCard(listing: Listing) -> impl IntoView {
    view! {
        <article class="place-card">
            <h2>{ listing.name }</h2>
            <p>{ format!("Price per night: ${}", listing.price) }</p>
            <a class="details-button" href=routes::place(listing.id)>{ "View Details" }</a>
        </article>
    }
}
