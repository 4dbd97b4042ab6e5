mod error;
mod requests;
mod types;

pub use error::UserError;
pub use requests::{
    CreateUserRequest, CreateUserResponse, MessageResponse, USER_CREATED_MESSAGE,
    USER_DELETED_MESSAGE, USER_NOT_FOUND_MESSAGE,
};
pub use types::{generate_user_id, User};
