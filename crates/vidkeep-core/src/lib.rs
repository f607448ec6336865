//! vidkeep Core Library
//!
//! This crate provides the video domain model, error types, configuration, and the
//! request validation rules shared by the store and the HTTP API.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata};
pub use models::{Resolution, Video, VideoResponse};
pub use validation::{FieldError, ValidationErrors};
