pub mod health;
pub mod testing;
pub mod videos;
