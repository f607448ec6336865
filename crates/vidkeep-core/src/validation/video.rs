//! Request payload validation for video writes.
//!
//! Bodies arrive as untyped JSON and are checked in a fixed order: presence of every
//! field, then resolution tags, then type, length and range rules. All violations are
//! collected before returning so a client can fix everything in one round trip. Rules
//! after the presence pass only run for fields that passed it, so each field reports at
//! most one violation.

use serde_json::{Map, Value};

use super::FieldError;
use crate::models::{CreateVideoInput, Resolution, UpdateVideoInput};

pub const TITLE_MAX_LENGTH: usize = 40;
pub const AUTHOR_MAX_LENGTH: usize = 20;
pub const MAX_AGE_RESTRICTION: i64 = 18;

const CREATE_FIELDS: [&str; 3] = ["title", "author", "availableResolutions"];
const UPDATE_FIELDS: [&str; 6] = [
    "title",
    "author",
    "availableResolutions",
    "canBeDownloaded",
    "minAgeRestriction",
    "publicationDate",
];

/// Validate a `POST /videos` body into a typed input.
pub fn validate_create(body: &Value) -> Result<CreateVideoInput, Vec<FieldError>> {
    let payload = Payload::new(body);
    let mut errors = payload.check_presence(&CREATE_FIELDS);

    let available_resolutions = payload.resolutions(&mut errors);
    let title = payload.text("title", TITLE_MAX_LENGTH, &mut errors);
    let author = payload.text("author", AUTHOR_MAX_LENGTH, &mut errors);

    match (title, author, available_resolutions) {
        (Some(title), Some(author), Some(available_resolutions)) if errors.is_empty() => {
            Ok(CreateVideoInput {
                title,
                author,
                available_resolutions,
            })
        }
        _ => Err(errors),
    }
}

/// Validate a `PUT /videos/{id}` body into a typed input.
pub fn validate_update(body: &Value) -> Result<UpdateVideoInput, Vec<FieldError>> {
    let payload = Payload::new(body);
    let mut errors = payload.check_presence(&UPDATE_FIELDS);

    let available_resolutions = payload.resolutions(&mut errors);
    let can_be_downloaded = payload.boolean("canBeDownloaded", &mut errors);
    let title = payload.text("title", TITLE_MAX_LENGTH, &mut errors);
    let author = payload.text("author", AUTHOR_MAX_LENGTH, &mut errors);
    let min_age_restriction = payload.age_restriction(&mut errors);
    let publication_date = payload.string("publicationDate", &mut errors);

    match (
        title,
        author,
        available_resolutions,
        can_be_downloaded,
        publication_date,
    ) {
        (
            Some(title),
            Some(author),
            Some(available_resolutions),
            Some(can_be_downloaded),
            Some(publication_date),
        ) if errors.is_empty() => Ok(UpdateVideoInput {
            title,
            author,
            available_resolutions,
            can_be_downloaded,
            min_age_restriction,
            publication_date,
        }),
        _ => Err(errors),
    }
}

/// Absent, `null` and `""` all count as missing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

struct Payload<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Payload<'a> {
    fn new(body: &'a Value) -> Self {
        Self {
            fields: body.as_object(),
        }
    }

    /// Field value when present and not blank.
    fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(name))
            .filter(|value| !is_blank(value))
    }

    fn check_presence(&self, names: &[&str]) -> Vec<FieldError> {
        names
            .iter()
            .filter(|name| self.get(name).is_none())
            .map(|name| FieldError::required(*name))
            .collect()
    }

    fn resolutions(&self, errors: &mut Vec<FieldError>) -> Option<Vec<Resolution>> {
        let value = self.get("availableResolutions")?;
        let parsed = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().and_then(Resolution::from_tag))
                .collect::<Option<Vec<_>>>()
        });
        if parsed.is_none() {
            errors.push(FieldError::new(
                "availableResolutions",
                "Must contain only supported resolutions.",
            ));
        }
        parsed
    }

    fn text(&self, name: &str, max_len: usize, errors: &mut Vec<FieldError>) -> Option<String> {
        let value = self.get(name)?;
        let Some(text) = value.as_str() else {
            errors.push(FieldError::new(name, "Must be a string."));
            return None;
        };
        if text.chars().count() > max_len {
            errors.push(FieldError::new(
                name,
                format!("Must be at most {} characters long.", max_len),
            ));
            return None;
        }
        Some(text.to_string())
    }

    fn string(&self, name: &str, errors: &mut Vec<FieldError>) -> Option<String> {
        let value = self.get(name)?;
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                errors.push(FieldError::new(name, "Must be a string."));
                None
            }
        }
    }

    fn boolean(&self, name: &str, errors: &mut Vec<FieldError>) -> Option<bool> {
        let value = self.get(name)?;
        if value.as_bool().is_none() {
            errors.push(FieldError::new(name, "Must be a boolean."));
        }
        value.as_bool()
    }

    fn age_restriction(&self, errors: &mut Vec<FieldError>) -> Option<i64> {
        let value = self.get("minAgeRestriction")?;
        match value.as_i64() {
            Some(age) if age <= MAX_AGE_RESTRICTION => Some(age),
            Some(_) => {
                errors.push(FieldError::new(
                    "minAgeRestriction",
                    format!("Must not be greater than {}.", MAX_AGE_RESTRICTION),
                ));
                None
            }
            None => {
                errors.push(FieldError::new("minAgeRestriction", "Must be an integer."));
                None
            }
        }
    }
}
