pub mod client;
pub mod errors;
pub mod types;

pub use client::{FollowClient, GITHUB_API_URL};
pub use errors::FollowError;
pub use types::{Account, ApiUser, Truncation, TruncationReason, UserList};
