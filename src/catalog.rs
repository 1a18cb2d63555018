/// Static listing store.
/// Holds the listings shown by the index page and the reviews attached to each of them.
use crate::models::{listing::Listing, review::Review};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum-price filter selected on the listing page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceFilter {
    All,
    Max(f64),
}

impl PriceFilter {
    /// Parses a `<select>` value. `"all"` disables the filter; anything else is read
    /// the way a browser reads `Number(value)`: blank is 0, garbage matches nothing.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "all" {
            return PriceFilter::All;
        }
        PriceFilter::Max(parse_number(value))
    }

    pub fn accepts(&self, listing: &Listing) -> bool {
        match self {
            PriceFilter::All => true,
            // NaN compares false, so an unparseable filter hides everything
            PriceFilter::Max(max) => listing.price <= *max,
        }
    }
}

/// Reads a form or route value with the rules of JavaScript's `Number()`:
/// surrounding whitespace is ignored, blank is 0, `Infinity` and `0x`/`0o`/`0b`
/// literals are accepted, anything else that is not a plain decimal is NaN.
pub fn parse_number(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }
    match value {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match value.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&value[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // Rust also accepts "inf", "nan" and friends; Number() does not
    if !value.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return f64::NAN;
    }
    value.parse::<f64>().unwrap_or(f64::NAN)
}

/// A listing resolved together with its reviews, ready for the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    pub listing: Listing,
    pub reviews: Vec<Review>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub listings: Vec<Listing>,
    // Keys are not checked against `listings`; a dangling key is simply never shown.
    pub reviews: HashMap<u32, Vec<Review>>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>, reviews: HashMap<u32, Vec<Review>>) -> Self {
        Self { listings, reviews }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Listings matching `filter`, in source order.
    pub fn filter_by_price(&self, filter: PriceFilter) -> Vec<Listing> {
        self.listings
            .iter()
            .filter(|listing| filter.accepts(listing))
            .cloned()
            .collect()
    }

    pub fn reviews_for(&self, id: u32) -> &[Review] {
        self.reviews.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolves a raw identifier taken from the route.
    /// The id is read like `Number(id)`, so "1.0" finds listing 1.
    /// Returns `None` when no listing carries it.
    pub fn place_details(&self, raw_id: &str) -> Option<PlaceDetails> {
        let wanted = parse_number(raw_id);
        let listing = self
            .listings
            .iter()
            .find(|listing| f64::from(listing.id) == wanted)?
            .clone();
        let reviews = self.reviews_for(listing.id).to_vec();
        Some(PlaceDetails { listing, reviews })
    }

    /// The built-in data used until the places API is wired in.
    pub fn demo() -> Self {
        let listing = |id: u32, name: &str, price: f64, host: &str, description: &str, amenities: &[&str]| Listing {
            id,
            name: name.into(),
            price,
            host: host.into(),
            description: description.into(),
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
        };
        let review = |user: &str, comment: &str, rating: u8| Review {
            user: user.into(),
            comment: comment.into(),
            rating,
        };

        let listings = vec![
            listing(1, "Beautiful Beach House", 150.0, "Alice", "Sunny place near the sea.", &["WiFi", "Kitchen", "Pool"]),
            listing(2, "Cozy Cabin", 100.0, "Bob", "Warm cabin in the woods.", &["Fireplace", "Parking", "WiFi"]),
            listing(3, "Modern Apartment", 200.0, "Carol", "Downtown, modern and clean.", &["WiFi", "Elevator", "Gym"]),
        ];

        let mut reviews = HashMap::new();
        reviews.insert(
            1,
            vec![
                review("John", "Amazing view!", 5),
                review("Sara", "Very clean and comfy.", 4),
            ],
        );
        reviews.insert(2, vec![review("Mike", "Super quiet place.", 5)]);
        reviews.insert(3, Vec::new());

        Self::new(listings, reviews)
    }
}
