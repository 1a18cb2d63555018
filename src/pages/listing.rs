use leptos::*;
use leptos::logging::log;
use crate::app::use_app_context;
use crate::catalog::PriceFilter;
use crate::components::listings_list::ListingsList;

/// Index page: every listing at or below the chosen nightly price.
#[component]
pub fn ListingPage() -> impl IntoView {
    let ctx = use_app_context();
    let (filter, set_filter) = create_signal(PriceFilter::All);

    let config = ctx.config.clone();
    let visible = Signal::derive(move || config.catalog.filter_by_price(filter.get()));

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        log!("[LISTING] Price filter set to {}", value);
        set_filter.set(PriceFilter::parse(&value));
    };

    view! {
        <section class="filter">
            <label for="price-filter">{ "Max price:" }</label>
            <select id="price-filter" on:change=on_change>
                <option value="all">{ "All" }</option>
                {ctx.config.price_options.iter().map(|price| view! {
                    <option value=price.to_string()>{ format!("${}", price) }</option>
                }).collect_view()}
            </select>
        </section>
        <ListingsList listings=visible />
    }
}
