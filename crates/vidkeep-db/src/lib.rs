//! In-memory repositories for the video collection
//!
//! The collection lives in process memory for the lifetime of the service. Every mutation
//! takes a single write lock, so concurrent requests never observe a half-applied change.

pub mod id;
pub mod video;

pub use id::IdGenerator;
pub use video::VideoRepository;
