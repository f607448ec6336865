//! Validation modules

pub mod video;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use video::{
    validate_create, validate_update, AUTHOR_MAX_LENGTH, MAX_AGE_RESTRICTION, TITLE_MAX_LENGTH,
};

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// One failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, REQUIRED_MESSAGE)
    }
}

/// Body of a 400 response: every violation, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    pub errors_messages: Vec<FieldError>,
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors_messages: Vec<FieldError>) -> Self {
        Self { errors_messages }
    }
}
