//! Newsletter signup
//!
//! There is no mailing backend: subscribing only produces the acknowledgement
//! shown to the reader.

use crate::error::{BlogError, Result, ValidationError};

/// Confirmation returned for a successful signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub email: String,
    pub message: String,
}

/// Sign `email` up for the newsletter
///
/// # Errors
///
/// Returns a validation error if `email` is empty or whitespace-only.
pub fn subscribe(email: &str) -> Result<Acknowledgement> {
    let email = email.trim();
    if email.is_empty() {
        return Err(BlogError::Validation(ValidationError::MissingFields(vec![
            "email".to_string(),
        ])));
    }

    tracing::info!("Newsletter signup");
    Ok(Acknowledgement {
        email: email.to_string(),
        message: format!("Thanks for subscribing, {}!", email),
    })
}
