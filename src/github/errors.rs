use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FollowError {
    #[error("GitHub credentials not found: {0}")]
    CredentialsNotFound(String),

    #[error("request to GitHub failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Anything other than 204 from a follow/unfollow call. The API reports
    /// 204 for "already following" too, so this never fires for repeats.
    #[error("GitHub refused to {action} {username}: HTTP {status}")]
    Rejected {
        action: &'static str,
        username: String,
        status: StatusCode,
    },

    #[error("account list file error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
