pub mod add_review;
pub mod listing;
pub mod login;
pub mod not_found;
pub mod place;
