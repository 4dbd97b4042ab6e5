mod attributes;
mod error;
mod http_mapping;
mod traits;

pub use attributes::{ATTR_EMAIL, ATTR_NAME, ATTR_USER_ID};
pub use error::{RepositoryError, Result};
pub use http_mapping::{repository_error_to_status_code, user_error_to_status_code};
pub use traits::UserRepository;
