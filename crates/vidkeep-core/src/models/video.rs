use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Closed set of resolution tags a video can be offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Resolution {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

impl Resolution {
    pub const ALL: [Resolution; 8] = [
        Resolution::P144,
        Resolution::P240,
        Resolution::P360,
        Resolution::P480,
        Resolution::P720,
        Resolution::P1080,
        Resolution::P1440,
        Resolution::P2160,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::P144 => "P144",
            Resolution::P240 => "P240",
            Resolution::P360 => "P360",
            Resolution::P480 => "P480",
            Resolution::P720 => "P720",
            Resolution::P1080 => "P1080",
            Resolution::P1440 => "P1440",
            Resolution::P2160 => "P2160",
        }
    }

    /// Exact, case-sensitive tag lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == tag)
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Formats a timestamp the way it is stored and served: RFC 3339, millisecond precision, `Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<i64>,
    pub created_at: String,
    pub publication_date: String,
    pub available_resolutions: Vec<Resolution>,
}

impl Video {
    /// Builds a freshly created video. Publication defaults to one day after creation.
    pub fn new(id: i64, input: CreateVideoInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            can_be_downloaded: true,
            min_age_restriction: None,
            created_at: format_timestamp(created_at),
            publication_date: format_timestamp(created_at + Duration::days(1)),
            available_resolutions: input.available_resolutions,
        }
    }

    /// Overwrites every mutable field at once. `id` and `created_at` are untouched.
    pub fn apply_update(&mut self, input: UpdateVideoInput) {
        self.title = input.title;
        self.author = input.author;
        self.available_resolutions = input.available_resolutions;
        self.can_be_downloaded = input.can_be_downloaded;
        self.min_age_restriction = input.min_age_restriction;
        self.publication_date = input.publication_date;
    }
}

/// Validated payload of `POST /videos`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoInput {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
}

/// Validated payload of `PUT /videos/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoInput {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<i64>,
    pub publication_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<i64>,
    pub created_at: String,
    pub publication_date: String,
    pub available_resolutions: Vec<Resolution>,
}

impl From<&Video> for VideoResponse {
    fn from(video: &Video) -> Self {
        VideoResponse {
            id: video.id,
            title: video.title.clone(),
            author: video.author.clone(),
            can_be_downloaded: video.can_be_downloaded,
            min_age_restriction: video.min_age_restriction,
            created_at: video.created_at.clone(),
            publication_date: video.publication_date.clone(),
            available_resolutions: video.available_resolutions.clone(),
        }
    }
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        VideoResponse::from(&video)
    }
}

impl VideoResponse {
    /// Projects an optional video; absent in, absent out.
    pub fn project(video: Option<&Video>) -> Option<Self> {
        video.map(VideoResponse::from)
    }
}
