//! Gmail API module split into logical submodules
//!
//! - auth: OAuth flow and token persistence
//! - messages: message listing
//! - operations: terminal actions (trash, permanent delete)

pub mod auth;
pub mod messages;
pub mod operations;

use async_trait::async_trait;

pub use auth::{authenticate, CredentialSource, InstalledFlow};

/// The three Gmail calls the executor needs, behind a trait so batch logic
/// can be exercised against fakes in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailApi: Send + Sync {
    /// Fetch up to `max_results` message ids matching `query` and/or
    /// `label_id`. One page only; no continuation.
    async fn list_message_ids(
        &self,
        query: Option<String>,
        label_id: Option<String>,
        max_results: u32,
    ) -> Result<Vec<String>, Box<dyn std::error::Error>>;

    /// Move one message to trash.
    async fn trash_message(&self, id: &str) -> Result<(), Box<dyn std::error::Error>>;

    /// Permanently delete one message, bypassing trash.
    async fn delete_message(&self, id: &str) -> Result<(), Box<dyn std::error::Error>>;
}

/// Authenticated handle to the Gmail REST API.
#[derive(Debug)]
pub struct GmailClient {
    http: reqwest::Client,
    token: String,
}

impl GmailClient {
    pub fn new(token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

#[async_trait]
impl MailApi for GmailClient {
    async fn list_message_ids(
        &self,
        query: Option<String>,
        label_id: Option<String>,
        max_results: u32,
    ) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        messages::list_message_ids(self, query, label_id, max_results).await
    }

    async fn trash_message(&self, id: &str) -> Result<(), Box<dyn std::error::Error>> {
        operations::trash_message(self, id).await
    }

    async fn delete_message(&self, id: &str) -> Result<(), Box<dyn std::error::Error>> {
        operations::delete_message(self, id).await
    }
}
