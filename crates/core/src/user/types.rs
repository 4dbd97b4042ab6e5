use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user record.
///
/// `user_id` is assigned by the system when the record is created and is the
/// only key the record can be looked up by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a new user with a freshly generated `user_id`.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: generate_user_id(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Generates a new random user identifier (UUID v4, hyphenated).
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_user_keeps_supplied_fields() {
        let user = User::new("Ada", "ada@example.com");

        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_new_user_id_is_a_uuid() {
        let user = User::new("Ada", "ada@example.com");

        let parsed = Uuid::parse_str(&user.user_id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_generated_ids_do_not_collide() {
        let ids: HashSet<String> = (0..1_000).map(|_| generate_user_id()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn test_user_serializes_with_snake_case_id() {
        let user = User {
            user_id: "abc-123".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user_id": "abc-123",
                "name": "Ada",
                "email": "ada@example.com"
            })
        );
    }
}
