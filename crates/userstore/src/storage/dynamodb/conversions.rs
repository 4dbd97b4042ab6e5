//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! user record. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use userstore_core::storage::{RepositoryError, ATTR_EMAIL, ATTR_NAME, ATTR_USER_ID};
use userstore_core::user::User;

/// Key attribute for a single user lookup.
pub fn user_key(user_id: &str) -> AttributeValue {
    AttributeValue::S(user_id.to_string())
}

/// Convert a User to DynamoDB item.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (ATTR_USER_ID.to_string(), user_key(&user.user_id)),
        (ATTR_NAME.to_string(), AttributeValue::S(user.name.clone())),
        (ATTR_EMAIL.to_string(), AttributeValue::S(user.email.clone())),
    ])
}

/// Convert a DynamoDB item to User.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> Result<User, RepositoryError> {
    Ok(User {
        user_id: get_string(item, ATTR_USER_ID)?,
        name: get_string(item, ATTR_NAME)?,
        email: get_string(item, ATTR_EMAIL)?,
    })
}

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, RepositoryError> {
    match item.get(key) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(_) => Err(RepositoryError::Serialization(format!(
            "Attribute {key} is not a string"
        ))),
        None => Err(RepositoryError::Serialization(format!(
            "Missing attribute: {key}"
        ))),
    }
}
