//! Top-level controller reconciling the form, the collection and request
//! outcomes into one snapshot for the render layer.

use shared::domain::{DraftField, User, UserDraft, UserId};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::{
    error::OperationError,
    form::{EditMode, FormController},
    store::CollectionStore,
    ConfirmPrompt, UsersApi, DELETE_CONFIRMATION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server accepted the change and a refresh was issued.
    Applied,
    /// Confirmation was declined; nothing was sent.
    Declined,
    /// Another submit or delete was still in flight; nothing was sent.
    Busy,
    /// The request failed; the error slot holds the message.
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagerSnapshot {
    pub users: Vec<User>,
    pub draft: UserDraft,
    pub mode: EditMode,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl ManagerSnapshot {
    pub fn heading(&self) -> &'static str {
        self.mode.heading()
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    pub fn can_cancel(&self) -> bool {
        self.mode.is_editing()
    }
}

pub struct UserManager<A, P> {
    api: A,
    prompt: P,
    store: CollectionStore,
    form: FormController,
    error: Mutex<Option<OperationError>>,
    snapshots: watch::Sender<ManagerSnapshot>,
}

impl<A: UsersApi, P: ConfirmPrompt> UserManager<A, P> {
    pub fn new(api: A, prompt: P) -> Self {
        let (snapshots, _) = watch::channel(ManagerSnapshot::default());
        Self {
            api,
            prompt,
            store: CollectionStore::new(),
            form: FormController::new(),
            error: Mutex::new(None),
            snapshots,
        }
    }

    /// Receives a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ManagerSnapshot> {
        self.snapshots.subscribe()
    }

    pub async fn snapshot(&self) -> ManagerSnapshot {
        let form = self.form.state().await;
        ManagerSnapshot {
            users: self.store.users().await,
            draft: form.draft,
            mode: form.mode,
            loading: self.store.is_loading(),
            submitting: self.form.is_mutation_pending(),
            error: self.error.lock().await.as_ref().map(ToString::to_string),
        }
    }

    pub async fn error(&self) -> Option<OperationError> {
        *self.error.lock().await
    }

    /// Initial load.
    pub async fn start(&self) -> bool {
        info!("loading users");
        self.refresh().await
    }

    /// Replaces the collection with the server's. Returns whether the fetch
    /// succeeded; on failure the previous collection is kept.
    pub async fn refresh(&self) -> bool {
        let fetch = self.store.begin_fetch();
        self.set_error(None).await;
        self.publish().await;

        let loaded = match self.store.load(&self.api, fetch).await {
            Ok(count) => {
                info!(count, "users loaded");
                self.set_error(None).await;
                true
            }
            Err(err) => {
                warn!("fetching users failed: {err:#}");
                self.set_error(Some(OperationError::Fetch)).await;
                false
            }
        };
        self.publish().await;
        loaded
    }

    pub async fn update_field(&self, field: DraftField, value: impl Into<String>) {
        self.form.update_field(field, value).await;
        self.publish().await;
    }

    pub async fn begin_edit(&self, user: &User) {
        self.form.begin_edit(user).await;
        self.publish().await;
    }

    /// Starts editing the listed user with `id`. Returns false when the
    /// current collection has no such user.
    pub async fn begin_edit_by_id(&self, id: UserId) -> bool {
        match self.store.find(id).await {
            Some(user) => {
                self.begin_edit(&user).await;
                true
            }
            None => false,
        }
    }

    pub async fn cancel(&self) {
        self.form.cancel().await;
        self.publish().await;
    }

    pub async fn submit(&self) -> MutationOutcome {
        let Some(ticket) = self.form.begin_mutation() else {
            debug!("submit ignored: another mutation is in flight");
            return MutationOutcome::Busy;
        };
        self.set_error(None).await;
        self.publish().await;

        match self.form.submit(&self.api, ticket).await {
            Ok(outcome) => {
                info!("user saved");
                self.publish().await;
                self.refresh().await;
                outcome
            }
            Err(err) => {
                warn!("saving user failed: {err:#}");
                self.set_error(Some(OperationError::Save)).await;
                self.publish().await;
                MutationOutcome::Failed
            }
        }
    }

    /// Asks for confirmation, then deletes `id`. The mutation slot is only
    /// claimed once the user has confirmed, so nothing reads as submitting
    /// while the prompt is open.
    pub async fn remove(&self, id: UserId) -> MutationOutcome {
        if self.form.is_mutation_pending() {
            debug!(user_id = id.0, "delete ignored: another mutation is in flight");
            return MutationOutcome::Busy;
        }
        if !self.prompt.confirm(DELETE_CONFIRMATION).await {
            debug!(user_id = id.0, "delete declined");
            return MutationOutcome::Declined;
        }
        let Some(ticket) = self.form.begin_mutation() else {
            debug!(user_id = id.0, "delete ignored: a mutation started while confirming");
            return MutationOutcome::Busy;
        };
        self.set_error(None).await;
        self.publish().await;

        match self.form.remove(&self.api, id, ticket).await {
            Ok(outcome) => {
                info!(user_id = id.0, "user deleted");
                self.publish().await;
                self.refresh().await;
                outcome
            }
            Err(err) => {
                warn!(user_id = id.0, "deleting user failed: {err:#}");
                self.set_error(Some(OperationError::Delete)).await;
                self.publish().await;
                MutationOutcome::Failed
            }
        }
    }

    async fn set_error(&self, error: Option<OperationError>) {
        *self.error.lock().await = error;
    }

    async fn publish(&self) {
        let snapshot = self.snapshot().await;
        self.snapshots.send_replace(snapshot);
    }
}

#[cfg(test)]
#[path = "tests/manager_tests.rs"]
mod tests;
