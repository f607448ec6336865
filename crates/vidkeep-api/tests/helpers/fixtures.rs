use serde_json::{json, Value};

pub fn create_video_body(title: &str) -> Value {
    json!({
        "title": title,
        "author": "ferris",
        "availableResolutions": ["P144", "P720"]
    })
}

pub fn update_video_body() -> Value {
    json!({
        "title": "Updated title",
        "author": "crab",
        "availableResolutions": ["P1080", "P2160"],
        "canBeDownloaded": false,
        "minAgeRestriction": 16,
        "publicationDate": "2030-06-01T12:00:00.000Z"
    })
}
