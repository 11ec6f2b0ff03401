use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// One platform user: the name mutation calls target plus the profile link
/// kept in exports. Duplicates are not deduplicated anywhere; lists keep
/// whatever order the API or the file gave them.
///
/// The serde renames double as the CSV column headers (`Username,URL`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "URL")]
    pub profile_url: String,
}

impl Account {
    pub fn new(username: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            profile_url: profile_url.into(),
        }
    }
}

/// Wire shape of a user object in GitHub list responses. Only the two fields
/// this tool cares about; serde drops the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub login: String,
    pub html_url: String,
}

impl From<ApiUser> for Account {
    fn from(user: ApiUser) -> Self {
        Account {
            username: user.login,
            profile_url: user.html_url,
        }
    }
}

/// Result of paginating a list endpoint. Pagination never fails outright:
/// whatever was accumulated before a bad page is returned, and `truncation`
/// records why the walk stopped early (if it did). Callers decide whether a
/// partial list is acceptable.
#[derive(Debug)]
pub struct UserList {
    accounts: Vec<Account>,
    truncation: Option<Truncation>,
}

impl UserList {
    pub(crate) fn complete(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            truncation: None,
        }
    }

    pub(crate) fn truncated(accounts: Vec<Account>, truncation: Truncation) -> Self {
        Self {
            accounts,
            truncation: Some(truncation),
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn into_accounts(self) -> Vec<Account> {
        self.accounts
    }

    pub fn is_complete(&self) -> bool {
        self.truncation.is_none()
    }

    pub fn truncation(&self) -> Option<&Truncation> {
        self.truncation.as_ref()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Why pagination stopped before an empty page was seen.
#[derive(Debug, Clone)]
pub struct Truncation {
    /// Page number of the request that failed; pages 1..page made it in.
    pub page: u32,
    pub reason: TruncationReason,
}

#[derive(Debug, Clone)]
pub enum TruncationReason {
    /// Non-2xx response.
    Status(StatusCode),
    /// Request never completed (connection, TLS, ...).
    Transport(String),
    /// 2xx response whose body was not a user list.
    Decode(String),
}

impl std::fmt::Display for Truncation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stopped at page {}: {}", self.page, self.reason)
    }
}

impl std::fmt::Display for TruncationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TruncationReason::Status(status) => write!(f, "HTTP {status}"),
            TruncationReason::Transport(msg) => write!(f, "transport error: {msg}"),
            TruncationReason::Decode(msg) => write!(f, "unreadable response: {msg}"),
        }
    }
}
