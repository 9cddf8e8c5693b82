pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, DEFAULT_REVIEW_LIMIT};
pub use error::ApiError;
pub use types::ApiEnvelope;
