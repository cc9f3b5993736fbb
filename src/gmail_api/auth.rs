use std::path::PathBuf;

use async_trait::async_trait;
use yup_oauth2::{InstalledFlowAuthenticator, InstalledFlowReturnMethod};

use super::GmailClient;

pub const CREDENTIALS_FILE: &str = "credentials.json";
pub const TOKEN_FILE: &str = "token.json";

/// Scopes required for trash and permanent delete.
pub const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/gmail.modify",
    "https://mail.google.com/",
];

// Narrow seam for "obtain or refresh a credential" so the rest of the
// program only depends on having a bearer token, not on the browser flow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialSource: Send + Sync {
    async fn obtain_token(&self) -> Result<String, Box<dyn std::error::Error>>;
}

/// The real flow: client secret from `credentials.json`, token cache in
/// `token.json` (format owned by yup-oauth2). A cached valid token is used
/// as-is, an expired one is refreshed, otherwise the interactive flow opens
/// a local HTTP listener and waits for the browser redirect. The cache file
/// is rewritten whenever a new or refreshed token comes back.
pub struct InstalledFlow {
    pub credentials_path: PathBuf,
    pub token_cache_path: PathBuf,
}

impl Default for InstalledFlow {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from(CREDENTIALS_FILE),
            token_cache_path: PathBuf::from(TOKEN_FILE),
        }
    }
}

#[async_trait]
impl CredentialSource for InstalledFlow {
    async fn obtain_token(&self) -> Result<String, Box<dyn std::error::Error>> {
        let secret = yup_oauth2::read_application_secret(&self.credentials_path)
            .await
            .map_err(|e| {
                format!(
                    "failed to read {}: {} (download the OAuth client secret from the Google Cloud console)",
                    self.credentials_path.display(),
                    e
                )
            })?;

        let auth =
            InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::HTTPRedirect)
                .persist_tokens_to_disk(self.token_cache_path.clone())
                .build()
                .await?;

        let token = auth.token(SCOPES).await?;
        match token.token() {
            Some(t) => Ok(t.to_string()),
            None => Err("authorization server returned no access token".into()),
        }
    }
}

/// Run the default flow and wrap the token in an API client. Any failure
/// here is fatal for the process; there is nothing to do without a
/// credential.
pub async fn authenticate() -> Result<GmailClient, Box<dyn std::error::Error>> {
    authenticate_with(&InstalledFlow::default()).await
}

pub async fn authenticate_with(
    source: &dyn CredentialSource,
) -> Result<GmailClient, Box<dyn std::error::Error>> {
    let token = source.obtain_token().await?;
    Ok(GmailClient::new(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn authenticate_wraps_the_token_from_the_source() {
        let mut source = MockCredentialSource::new();
        source
            .expect_obtain_token()
            .times(1)
            .returning(|| Ok("ya29.test-token".to_string()));

        let client = authenticate_with(&source).await.unwrap();
        assert_eq!(client.token(), "ya29.test-token");
    }

    #[tokio::test]
    async fn authenticate_propagates_source_failure() {
        let mut source = MockCredentialSource::new();
        source
            .expect_obtain_token()
            .times(1)
            .returning(|| Err("user refused consent".into()));

        let result = authenticate_with(&source).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("refused"));
    }

    #[test]
    fn default_flow_uses_the_conventional_file_names() {
        let flow = InstalledFlow::default();
        assert_eq!(flow.credentials_path, PathBuf::from("credentials.json"));
        assert_eq!(flow.token_cache_path, PathBuf::from("token.json"));
    }
}
