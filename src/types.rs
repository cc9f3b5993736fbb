use serde::Deserialize;

/// Response shape of `GET /gmail/v1/users/me/messages`. Gmail omits the
/// `messages` field entirely when nothing matches the query.
#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub messages: Option<Vec<MessageRef>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MessageRef {
    pub id: Option<String>,
}

/// Error envelope the Gmail API returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub message: Option<String>,
}
