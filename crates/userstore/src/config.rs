use std::{env, time::Duration};

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the users table (default: "Users")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub table_name: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Custom DynamoDB endpoint, e.g. a local DynamoDB container
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub aws_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub aws_region: String,
    /// Emit logs as JSON lines instead of the human readable format
    pub json_logs: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `USERS_TABLE_NAME` - Users table name (default: "Users")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: unset)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `LOG_FORMAT` - `json` for JSON logs, anything else for text (default: text)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("USERS_TABLE_NAME").unwrap_or_else(|_| "Users".to_string()),
            request_timeout_seconds: parse_timeout_seconds(
                env::var("REQUEST_TIMEOUT_SECONDS").ok().as_deref(),
            ),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

/// Zero, negative or unparsable values fall back to the default.
fn parse_timeout_seconds(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&seconds| seconds > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS)
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
