//! HTTP client for the userstore API.

pub mod health;
pub mod users;

use userstore_core::user::MessageResponse;

use crate::error::{ClientError, Result};

/// HTTP client for the userstore API.
#[derive(Debug, Clone)]
pub struct UserstoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl UserstoreClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build `/users/{user_id}` with the id escaped as a single path segment.
    fn user_url(&self, user_id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.url("/users"))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .push(user_id);
        Ok(url)
    }

    /// Decode a success body, or turn an error status into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let body = response.text().await.unwrap_or_default();
        if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: resource.to_string(),
            })
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Extract the `message` field from an error body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<MessageResponse>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = UserstoreClient::new("http://localhost:3000/");
        assert_eq!(client.url("/users"), "http://localhost:3000/users");
    }

    #[test]
    fn test_user_url_escapes_reserved_characters() {
        let client = UserstoreClient::new("http://localhost:3000");

        let url = client.user_url("abc?x").unwrap();
        assert_eq!(url.path(), "/users/abc%3Fx");
        assert_eq!(url.query(), None);

        let url = client.user_url("a/b#c").unwrap();
        assert_eq!(url.path(), "/users/a%2Fb%23c");
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_delete_request_targets_exact_id() {
        let client = UserstoreClient::new("http://localhost:3000/");

        let request = client
            .client
            .delete(client.user_url("abc?x").unwrap())
            .build()
            .unwrap();

        assert_eq!(request.url().path(), "/users/abc%3Fx");
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_user_url_rejects_invalid_base() {
        let client = UserstoreClient::new("not a url");
        assert!(matches!(
            client.user_url("abc"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message(r#"{"message":"Missing required field: name"}"#),
            "Missing required field: name"
        );
    }

    #[test]
    fn test_error_message_from_plain_body() {
        assert_eq!(error_message("Request Timeout"), "Request Timeout");
    }

    #[test]
    fn test_error_message_from_empty_body() {
        assert_eq!(error_message("  "), "Unknown error");
    }
}
