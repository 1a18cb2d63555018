/// Input checks for the login and review forms. They run before any network or storage call.
use crate::api::Credentials;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("Review and rating are required.")]
    MissingReview,
    #[error("Rating must be a whole number.")]
    InvalidRating,
}

/// Email is trimmed, the password is taken as typed.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// A review that passed the form checks. Not sent anywhere yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub place_id: String,
    pub comment: String,
    pub rating: i64,
}

pub fn validate_review(place_id: &str, comment: &str, rating: &str) -> Result<ReviewDraft, ValidationError> {
    let comment = comment.trim();
    let rating = rating.trim();
    if comment.is_empty() || rating.is_empty() {
        return Err(ValidationError::MissingReview);
    }
    // Range is left to the backend
    let rating = rating.parse::<i64>().map_err(|_| ValidationError::InvalidRating)?;
    Ok(ReviewDraft {
        place_id: place_id.to_string(),
        comment: comment.to_string(),
        rating,
    })
}
