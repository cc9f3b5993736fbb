use reqwest::Response;

use crate::types::ErrorResponse;

use super::GmailClient;

/// Move a message to trash.
pub async fn trash_message(
    client: &GmailClient,
    message_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let trash_url = format!(
        "https://gmail.googleapis.com/gmail/v1/users/me/messages/{}/trash",
        message_id
    );

    let response = client
        .http()
        .post(&trash_url)
        .bearer_auth(client.token())
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("Failed to trash message: {}", error_detail(response).await).into())
    }
}

/// Permanently delete a message. Unlike trash this cannot be undone and
/// needs the full mail scope.
pub async fn delete_message(
    client: &GmailClient,
    message_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let delete_url = format!(
        "https://gmail.googleapis.com/gmail/v1/users/me/messages/{}",
        message_id
    );

    let response = client
        .http()
        .delete(&delete_url)
        .bearer_auth(client.token())
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("Failed to delete message: {}", error_detail(response).await).into())
    }
}

/// Pull the human-readable error message out of a failed response. Gmail
/// wraps it in an `{"error": {...}}` envelope; fall back to the raw body,
/// then to the status line.
pub(crate) async fn error_detail(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(&body) {
        if let Some(message) = parsed.error.and_then(|e| e.message) {
            return format!("{} ({})", message, status);
        }
    }
    if body.is_empty() {
        status.to_string()
    } else {
        format!("{} ({})", body.trim(), status)
    }
}
