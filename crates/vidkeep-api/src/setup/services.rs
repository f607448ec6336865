//! Builds the application state.

use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use vidkeep_core::models::{format_timestamp, Resolution, Video};
use vidkeep_core::Config;
use vidkeep_db::VideoRepository;

/// Create the video store, seeding it when configured to.
pub async fn initialize_services(config: &Config) -> Arc<AppState> {
    let videos = VideoRepository::new();

    if config.seed_sample_video {
        videos.append(sample_video(&videos)).await;
        tracing::info!("Video store seeded with a sample video");
    }

    AppState::new(config.clone(), videos)
}

fn sample_video(videos: &VideoRepository) -> Video {
    let now = format_timestamp(Utc::now());
    Video {
        id: videos.next_id(),
        title: "Sample video".to_string(),
        author: "vidkeep".to_string(),
        can_be_downloaded: false,
        min_age_restriction: None,
        created_at: now.clone(),
        publication_date: now,
        available_resolutions: vec![Resolution::P144],
    }
}
