use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: u32,                // Unique listing identifier
    pub name: String,           // Display name of the place
    pub price: f64,             // Nightly price
    pub host: String,           // Host name
    pub description: String,    // Short description of the place
    pub amenities: Vec<String>, // Amenity names, in display order
}

impl Listing {
    /// Amenities joined for display, e.g. "WiFi, Kitchen, Pool".
    pub fn amenity_summary(&self) -> String {
        self.amenities.join(", ")
    }
}
