use reqwest::header::ACCEPT;
use reqwest::{Client, Method, StatusCode};
use tracing::{debug, warn};

use crate::config::Credentials;
use crate::github::errors::FollowError;
use crate::github::types::{Account, ApiUser, Truncation, TruncationReason, UserList};

pub const GITHUB_API_URL: &str = "https://api.github.com";

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const PER_PAGE: u32 = 100;

/// Client for the four follow-related GitHub endpoints. Credentials are
/// injected once at construction and sent as HTTP basic auth on every call;
/// nothing here reads ambient environment state.
#[derive(Debug)]
pub struct FollowClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl FollowClient {
    pub fn new(credentials: Credentials) -> Result<Self, FollowError> {
        Self::with_base_url(credentials, GITHUB_API_URL)
    }

    /// Point the client at a different API host. Tests aim this at a mock
    /// server; production code always uses [`GITHUB_API_URL`].
    pub fn with_base_url(
        credentials: Credentials,
        base_url: impl Into<String>,
    ) -> Result<Self, FollowError> {
        let http = Client::builder()
            .user_agent(concat!("gh-follower/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            credentials,
        })
    }

    /// All accounts the authenticated user follows.
    pub async fn following(&self) -> UserList {
        self.fetch_accounts("/user/following").await
    }

    /// All members of an organization visible to the authenticated user.
    pub async fn org_members(&self, org: &str) -> UserList {
        self.fetch_accounts(&format!("/orgs/{org}/members")).await
    }

    /// Walks a cursor-paginated list endpoint page by page until the first
    /// empty page. The first non-2xx response, transport failure, or
    /// undecodable body ends the walk; everything collected up to that point
    /// comes back as a truncated list rather than an error. No retries.
    async fn fetch_accounts(&self, path: &str) -> UserList {
        let mut accounts = Vec::new();
        let mut page: u32 = 1;

        loop {
            let request = self
                .http
                .get(format!("{}{}", self.base_url, path))
                .basic_auth(&self.credentials.username, Some(&self.credentials.token))
                .header(ACCEPT, ACCEPT_GITHUB_JSON)
                .query(&[("page", page), ("per_page", PER_PAGE)]);

            let response = match request.send().await {
                Ok(response) => response,
                Err(err) => {
                    warn!(path, page, error = %err, "list request failed, keeping partial result");
                    return UserList::truncated(
                        accounts,
                        Truncation {
                            page,
                            reason: TruncationReason::Transport(err.to_string()),
                        },
                    );
                }
            };

            let status = response.status();
            if !status.is_success() {
                warn!(path, page, %status, "GitHub rejected list request, keeping partial result");
                return UserList::truncated(
                    accounts,
                    Truncation {
                        page,
                        reason: TruncationReason::Status(status),
                    },
                );
            }

            let batch: Vec<ApiUser> = match response.json().await {
                Ok(batch) => batch,
                Err(err) => {
                    warn!(path, page, error = %err, "could not decode list page, keeping partial result");
                    return UserList::truncated(
                        accounts,
                        Truncation {
                            page,
                            reason: TruncationReason::Decode(err.to_string()),
                        },
                    );
                }
            };

            // An empty page is the only end-of-data signal; total-count
            // headers are never consulted.
            if batch.is_empty() {
                break;
            }

            debug!(path, page, count = batch.len(), "fetched list page");
            accounts.extend(batch.into_iter().map(Account::from));
            page += 1;
        }

        UserList::complete(accounts)
    }

    pub async fn follow(&self, username: &str) -> Result<(), FollowError> {
        self.mutate(Method::PUT, "follow", username).await
    }

    pub async fn unfollow(&self, username: &str) -> Result<(), FollowError> {
        self.mutate(Method::DELETE, "unfollow", username).await
    }

    /// One idempotent write. 204 is the sole success signal; the API answers
    /// 204 whether or not the relationship already existed.
    async fn mutate(
        &self,
        method: Method,
        action: &'static str,
        username: &str,
    ) -> Result<(), FollowError> {
        let url = format!("{}/user/following/{}", self.base_url, username);
        let response = self
            .http
            .request(method, url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.token))
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .send()
            .await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => Err(FollowError::Rejected {
                action,
                username: username.to_string(),
                status,
            }),
        }
    }
}
