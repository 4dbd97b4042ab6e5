//! Table configuration types (Functional Core - pure data).

use userstore_core::storage::ATTR_USER_ID;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical table configuration for the users table.
///
/// A single string partition key; no sort key and no secondary indexes.
pub fn users_table_config() -> TableConfig {
    TableConfig {
        table_name: "Users".to_string(),
        partition_key: KeyAttribute {
            name: ATTR_USER_ID.to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_table_is_keyed_on_user_id() {
        let config = users_table_config();
        assert_eq!(config.table_name, "Users");
        assert_eq!(config.partition_key.name, "user_id");
        assert_eq!(config.partition_key.attribute_type, AttributeType::String);
    }

    #[test]
    fn test_with_table_name() {
        let config = users_table_config().with_table_name("users-dev");
        assert_eq!(config.table_name, "users-dev");
        assert_eq!(config.partition_key.name, "user_id");
    }
}
