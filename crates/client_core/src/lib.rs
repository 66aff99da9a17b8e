use anyhow::Result;
use async_trait::async_trait;
use shared::domain::{User, UserDraft, UserId};

pub mod config;
pub mod error;
mod form;
mod manager;
mod store;
pub mod transport;

pub use config::{load_settings_from, ClientSettings};
pub use error::{ConfigError, OperationError};
pub use form::{EditMode, FormController, FormState, MutationTicket};
pub use manager::{ManagerSnapshot, MutationOutcome, UserManager};
pub use store::{CollectionStore, FetchGuard};
pub use transport::HttpUsersApi;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this user?";

/// Remote users collection. Any transport failure or non-success status is an `Err`.
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn create_user(&self, draft: &UserDraft) -> Result<()>;
    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<()>;
    async fn delete_user(&self, id: UserId) -> Result<()>;
}

#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

/// Answers every confirmation with a fixed value.
pub struct AutoConfirm(pub bool);

#[async_trait]
impl ConfirmPrompt for AutoConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
