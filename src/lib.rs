// gh-follower library - bulk follow/unfollow against the GitHub REST API
// This exposes the core components for testing and integration

pub mod batch;
pub mod cli;
pub mod config;
pub mod github;
pub mod store;
pub mod telemetry;

// Re-export key types for easy access
pub use batch::{
    AccountMutator, BatchFailure, BatchReport, BatchRunner, FixedDelay, FollowAction,
    MutationKind, Throttle,
};
pub use config::Credentials;
pub use github::{Account, FollowClient, FollowError, Truncation, TruncationReason, UserList};
pub use telemetry::init_telemetry;
