//! Application state shared by every handler.

use std::sync::Arc;
use vidkeep_core::Config;
use vidkeep_db::VideoRepository;

#[derive(Clone)]
pub struct AppState {
    pub videos: VideoRepository,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, videos: VideoRepository) -> Arc<Self> {
        Arc::new(Self { videos, config })
    }
}
