use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use vidkeep_core::models::{CreateVideoInput, UpdateVideoInput, Video};

use crate::id::IdGenerator;

/// Repository for the video collection
///
/// Cloning is cheap and every clone shares the same collection.
#[derive(Clone, Default)]
pub struct VideoRepository {
    videos: Arc<RwLock<Vec<Video>>>,
    ids: Arc<IdGenerator>,
}

impl VideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored video, in insertion order
    #[tracing::instrument(skip(self), fields(store.operation = "list"))]
    pub async fn list(&self) -> Vec<Video> {
        self.videos.read().await.clone()
    }

    #[tracing::instrument(skip(self), fields(store.operation = "count"))]
    pub async fn count(&self) -> usize {
        self.videos.read().await.len()
    }

    /// Identifier for the next video; unique for the lifetime of the repository.
    pub fn next_id(&self) -> i64 {
        self.ids.next_id()
    }

    /// Push a fully built video at the end of the collection
    #[tracing::instrument(skip(self, video), fields(store.operation = "insert", store.record_id = video.id))]
    pub async fn append(&self, video: Video) {
        self.videos.write().await.push(video);
    }

    /// Create a video from validated input, assigning its id and creation time
    #[tracing::instrument(skip(self, input), fields(store.operation = "insert"))]
    pub async fn create(&self, input: CreateVideoInput) -> Video {
        let video = Video::new(self.next_id(), input, Utc::now());
        self.append(video.clone()).await;
        tracing::debug!(video_id = video.id, "Video created");
        video
    }

    /// First video with the given id
    #[tracing::instrument(skip(self), fields(store.operation = "select", store.record_id = id))]
    pub async fn find_by_id(&self, id: i64) -> Option<Video> {
        self.videos
            .read()
            .await
            .iter()
            .find(|video| video.id == id)
            .cloned()
    }

    /// Overwrite every mutable field of the video with the given id.
    ///
    /// Returns `false` when no such video exists.
    #[tracing::instrument(skip(self, input), fields(store.operation = "update", store.record_id = id))]
    pub async fn update_by_id(&self, id: i64, input: UpdateVideoInput) -> bool {
        let mut videos = self.videos.write().await;
        match videos.iter_mut().find(|video| video.id == id) {
            Some(video) => {
                video.apply_update(input);
                true
            }
            None => false,
        }
    }

    /// Remove every video with the given id, keeping the order of the rest.
    ///
    /// Returns the number of removed videos.
    #[tracing::instrument(skip(self), fields(store.operation = "delete", store.record_id = id))]
    pub async fn remove_by_id(&self, id: i64) -> usize {
        let mut videos = self.videos.write().await;
        let before = videos.len();
        videos.retain(|video| video.id != id);
        before - videos.len()
    }

    /// Drop the whole collection
    #[tracing::instrument(skip(self), fields(store.operation = "truncate"))]
    pub async fn reset(&self) {
        let mut videos = self.videos.write().await;
        let removed = videos.len();
        videos.clear();
        tracing::info!(removed, "Video collection cleared");
    }
}
