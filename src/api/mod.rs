pub mod client;
pub mod models;

pub use client::PlatformClient;
pub use models::ApiError;
