//! API request and response bodies for user operations.
//!
//! These types are shared between the server and the client for type-safe API
//! communication. They are plain data with no I/O.

use serde::{Deserialize, Serialize};

use super::{error::UserError, types::User};

pub const USER_CREATED_MESSAGE: &str = "User created successfully";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const USER_DELETED_MESSAGE: &str = "User deleted";

/// Request payload for creating a new user.
///
/// Both fields are optional at the serde level so that an absent field is
/// reported as a [`UserError::MissingField`] instead of a generic parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Create a request with both fields set.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Checks that every required field is present.
    ///
    /// Returns the owned `(name, email)` pair on success.
    pub fn validate(self) -> Result<(String, String), UserError> {
        let name = self.name.ok_or(UserError::MissingField("name"))?;
        let email = self.email.ok_or(UserError::MissingField("email"))?;
        Ok((name, email))
    }

    /// Validate and convert into a [`User`] with a freshly generated id.
    pub fn into_user(self) -> Result<User, UserError> {
        let (name, email) = self.validate()?;
        Ok(User::new(name, email))
    }
}

/// Response body returned after a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user_id: String,
}

impl CreateUserResponse {
    pub fn created(user_id: impl Into<String>) -> Self {
        Self {
            message: USER_CREATED_MESSAGE.to_string(),
            user_id: user_id.into(),
        }
    }
}

/// Response body carrying only a human readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(USER_NOT_FOUND_MESSAGE)
    }

    pub fn deleted() -> Self {
        Self::new(USER_DELETED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_request() {
        let request = CreateUserRequest::new("Ada", "ada@example.com");

        assert_eq!(
            request.validate(),
            Ok(("Ada".to_string(), "ada@example.com".to_string()))
        );
    }

    #[test]
    fn test_validate_missing_name() {
        let request = CreateUserRequest {
            name: None,
            email: Some("ada@example.com".to_string()),
        };

        assert_eq!(request.validate(), Err(UserError::MissingField("name")));
    }

    #[test]
    fn test_validate_missing_email() {
        let request = CreateUserRequest {
            name: Some("Ada".to_string()),
            email: None,
        };

        assert_eq!(request.validate(), Err(UserError::MissingField("email")));
    }

    #[test]
    fn test_empty_strings_count_as_present() {
        let request = CreateUserRequest::new("", "");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_deserialize_ignores_caller_supplied_id() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{"user_id":"chosen-by-caller","name":"Ada","email":"ada@example.com"}"#,
        )
        .unwrap();

        let user = request.into_user().unwrap();
        assert_ne!(user.user_id, "chosen-by-caller");
    }

    #[test]
    fn test_deserialize_null_field_is_missing() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"name":null,"email":"ada@example.com"}"#).unwrap();

        assert_eq!(request.validate(), Err(UserError::MissingField("name")));
    }

    #[test]
    fn test_create_response_body() {
        let json = serde_json::to_value(CreateUserResponse::created("abc-123")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "User created successfully", "user_id": "abc-123"})
        );
    }

    #[test]
    fn test_message_responses() {
        assert_eq!(MessageResponse::not_found().message, "User not found");
        assert_eq!(MessageResponse::deleted().message, "User deleted");
    }
}
