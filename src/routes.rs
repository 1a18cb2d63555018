//! Route patterns and path builders shared by the router and the pages.
use std::fmt::Display;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const PLACE: &str = "/place/:id";
pub const PLACE_REVIEW: &str = "/place/:id/review";

pub fn place(id: impl Display) -> String {
    format!("/place/{}", id)
}

pub fn place_review(id: impl Display) -> String {
    format!("/place/{}/review", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_patterns() {
        assert_eq!(place(3), PLACE.replace(":id", "3"));
        assert_eq!(place_review("3"), PLACE_REVIEW.replace(":id", "3"));
    }
}
