use thiserror::Error;

use crate::models::Field;

/// Why a field failed validation. The messages are the user-facing ones the
/// UI shell shows next to the offending field.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum InvalidReason {
    #[error("enter a valid URL starting with http:// or https://")]
    InvalidUrl,
    #[error("enter a valid country code like +91")]
    InvalidCountryCode,
    #[error("enter a valid local phone number (6-15 digits)")]
    InvalidLocalNumber,
    #[error("enter a valid WhatsApp local number (6-15 digits)")]
    InvalidMessagingNumber,
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("WiFi name cannot be empty")]
    EmptySsid,
    #[error("text cannot be empty")]
    EmptyText,
    #[error("enter at least one contact field")]
    NoContactFields,
}

/// A single validation failure: the first offending field, in the fixed
/// per-type check order, and the reason it was rejected.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("{field}: {reason}")]
pub struct InvalidField {
    pub field: Field,
    pub reason: InvalidReason,
}

impl InvalidField {
    pub(crate) fn new(field: Field, reason: InvalidReason) -> Self {
        Self { field, reason }
    }
}
