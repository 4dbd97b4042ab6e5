//! User CLI commands.

use clap::{Parser, Subcommand};

/// User management commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// Create a new user.
    Create {
        /// User name.
        #[arg(long)]
        name: String,
        /// User email.
        #[arg(long)]
        email: String,
    },
    /// Get user by ID.
    Get {
        /// User ID.
        id: String,
    },
    /// Delete user by ID.
    Delete {
        /// User ID.
        id: String,
    },
}
