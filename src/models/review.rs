// src/models/review.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub user: String,    // Name of the author
    pub comment: String, // Content of the review
    pub rating: u8,      // Expected 1-5, not enforced
}
