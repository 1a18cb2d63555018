use leptos::*;
use crate::models::listing::Listing;

#[component]
pub fn PlaceSummary(listing: Listing) -> impl IntoView {
    let amenities = listing.amenity_summary();
    view! {
        <h1>{ listing.name }</h1>
        <div class="place-info">
            <p><strong>{ "Host:" }</strong>{ format!(" {}", listing.host) }</p>
            <p><strong>{ "Price per night:" }</strong>{ format!(" ${}", listing.price) }</p>
            <p><strong>{ "Description:" }</strong>{ format!(" {}", listing.description) }</p>
            <p><strong>{ "Amenities:" }</strong>{ format!(" {}", amenities) }</p>
        </div>
    }
}
