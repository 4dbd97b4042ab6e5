//! Attribute names of a stored user item.
//!
//! Shared by every writer of the users table so the server and the developer
//! tooling agree on the item layout. They match the JSON field names of
//! [`User`](crate::user::User).

/// Partition key of the users table.
pub const ATTR_USER_ID: &str = "user_id";
pub const ATTR_NAME: &str = "name";
pub const ATTR_EMAIL: &str = "email";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;

    #[test]
    fn test_attribute_names_match_user_fields() {
        let json = serde_json::to_value(User::new("Ada", "ada@example.com")).unwrap();
        let fields = json.as_object().unwrap();

        assert_eq!(fields.len(), 3);
        for attr in [ATTR_USER_ID, ATTR_NAME, ATTR_EMAIL] {
            assert!(fields.contains_key(attr), "missing field {attr}");
        }
    }
}
