use crate::types::MessagesResponse;

use super::operations::error_detail;
use super::GmailClient;

const MESSAGES_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages";

/// Fetch one page of message ids matching the given search query and/or
/// label. Gmail drops the `messages` field when nothing matches, so an
/// absent list is an empty page, not an error.
pub async fn list_message_ids(
    client: &GmailClient,
    query: Option<String>,
    label_id: Option<String>,
    max_results: u32,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut params: Vec<(&str, String)> = vec![("maxResults", max_results.to_string())];
    if let Some(q) = query {
        params.push(("q", q));
    }
    if let Some(label) = label_id {
        params.push(("labelIds", label));
    }

    let response = client
        .http()
        .get(MESSAGES_URL)
        .query(&params)
        .bearer_auth(client.token())
        .send()
        .await?;

    if response.status().is_success() {
        let messages_data: MessagesResponse = response.json().await?;
        let ids = messages_data
            .messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|msg_ref| msg_ref.id)
            .collect();
        Ok(ids)
    } else {
        Err(format!("Failed to list messages: {}", error_detail(response).await).into())
    }
}
