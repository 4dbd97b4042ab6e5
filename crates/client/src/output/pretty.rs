//! Pretty output formatting.

use userstore_core::user::{CreateUserResponse, User};

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    format!(
        "{}\n  ID: {}\n  Email: {}",
        user.name, user.user_id, user.email
    )
}

/// Format a create response for display.
pub fn format_created(response: &CreateUserResponse) -> String {
    format!("{}\n  ID: {}", response.message, response.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_user() {
        let user = User {
            user_id: "abc-123".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        assert_eq!(
            format_user(&user),
            "Ada\n  ID: abc-123\n  Email: ada@example.com"
        );
    }

    #[test]
    fn test_format_created() {
        let response = CreateUserResponse::created("abc-123");
        assert_eq!(
            format_created(&response),
            "User created successfully\n  ID: abc-123"
        );
    }
}
