//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use userstore_core::storage::{ATTR_EMAIL, ATTR_NAME, ATTR_USER_ID};
use userstore_core::user::User;

const SEED_NAMES: [&str; 10] = [
    "Ada Lovelace",
    "Grace Hopper",
    "Alan Turing",
    "Barbara Liskov",
    "Edsger Dijkstra",
    "Margaret Hamilton",
    "Donald Knuth",
    "Frances Allen",
    "Ken Thompson",
    "Radia Perlman",
];

/// Generate `count` demo users, each with a fresh id.
///
/// Names cycle through a fixed list; emails get a numeric suffix once the
/// list wraps so every seeded email is unique.
pub fn generate_seed_users(count: u32) -> Vec<User> {
    (0..count as usize)
        .map(|i| {
            let name = SEED_NAMES[i % SEED_NAMES.len()];
            let local_part = name.to_lowercase().replace(' ', ".");
            let round = i / SEED_NAMES.len();
            let email = if round == 0 {
                format!("{local_part}@example.com")
            } else {
                format!("{local_part}{round}@example.com")
            };
            User::new(name, email)
        })
        .collect()
}

fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            ATTR_USER_ID.to_string(),
            AttributeValue::S(user.user_id.clone()),
        ),
        (ATTR_NAME.to_string(), AttributeValue::S(user.name.clone())),
        (ATTR_EMAIL.to_string(), AttributeValue::S(user.email.clone())),
    ])
}

/// Write the users one item at a time. Returns the number inserted.
pub async fn seed_users(client: &Client, table_name: &str, users: &[User]) -> Result<usize> {
    for user in users {
        client
            .put_item()
            .table_name(table_name)
            .set_item(Some(user_to_item(user)))
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
    }
    Ok(users.len())
}
