use crate::github::FollowError;

pub const USERNAME_VAR: &str = "GITHUB_USERNAME";
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// GitHub account name + personal access token, read once at startup and
/// passed explicitly into [`crate::github::FollowClient`]. Components never
/// reach back into the environment themselves, so tests can inject whatever
/// credentials they like.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Reads `GITHUB_USERNAME` / `GITHUB_TOKEN`. `main` loads `.env` via
    /// dotenvy before calling this.
    pub fn from_env() -> Result<Self, FollowError> {
        Ok(Self {
            username: read_var(USERNAME_VAR)?,
            token: read_var(TOKEN_VAR)?,
        })
    }
}

fn read_var(name: &str) -> Result<String, FollowError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(FollowError::CredentialsNotFound(format!(
            "set {name} in the environment or in a .env file (token needs the 'user:follow' scope)"
        ))),
    }
}
