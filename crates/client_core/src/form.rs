use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use shared::domain::{DraftField, User, UserDraft, UserId};
use tokio::sync::Mutex;
use tracing::debug;

use crate::{manager::MutationOutcome, UsersApi};

/// Create-vs-edit switch. Picks the request method and target, and the labels
/// the form shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Creating,
    Editing(UserId),
}

impl EditMode {
    pub fn is_editing(self) -> bool {
        matches!(self, EditMode::Editing(_))
    }

    pub fn heading(self) -> &'static str {
        match self {
            EditMode::Creating => "Create new user",
            EditMode::Editing(_) => "Edit user",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            EditMode::Creating => "Save",
            EditMode::Editing(_) => "Update",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: UserDraft,
    pub mode: EditMode,
}

impl FormState {
    fn reset(&mut self) {
        *self = FormState::default();
    }
}

/// Held for the whole lifetime of a submit or delete. Only one exists at a time.
pub struct MutationTicket<'a> {
    pending: &'a AtomicBool,
}

impl Drop for MutationTicket<'_> {
    fn drop(&mut self) {
        self.pending.store(false, Ordering::Release);
    }
}

#[derive(Default)]
pub struct FormController {
    state: Mutex<FormState>,
    mutation_pending: AtomicBool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    pub async fn update_field(&self, field: DraftField, value: impl Into<String>) {
        self.state.lock().await.draft.set(field, value);
    }

    /// Switches to editing `user`, discarding any unsaved input.
    pub async fn begin_edit(&self, user: &User) {
        let mut state = self.state.lock().await;
        state.mode = EditMode::Editing(user.id);
        state.draft = UserDraft::from(user);
        debug!(user_id = user.id.0, "form: editing user");
    }

    pub async fn cancel(&self) {
        self.state.lock().await.reset();
    }

    pub fn is_mutation_pending(&self) -> bool {
        self.mutation_pending.load(Ordering::Acquire)
    }

    /// Claims the single mutation slot, or `None` while another submit or
    /// delete is still in flight.
    pub fn begin_mutation(&self) -> Option<MutationTicket<'_>> {
        self.mutation_pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| MutationTicket {
                pending: &self.mutation_pending,
            })
    }

    /// Sends the draft as a create or an update depending on the mode. On
    /// failure the draft and mode are left exactly as they were.
    pub async fn submit<A: UsersApi + ?Sized>(
        &self,
        api: &A,
        ticket: MutationTicket<'_>,
    ) -> Result<MutationOutcome> {
        let FormState { draft, mode } = self.state().await;
        match mode {
            EditMode::Creating => api.create_user(&draft).await?,
            EditMode::Editing(id) => api.update_user(id, &draft).await?,
        }

        self.state.lock().await.reset();
        drop(ticket);
        Ok(MutationOutcome::Applied)
    }

    /// Deletes `id`. Confirmation is the caller's job and must happen before
    /// the ticket is taken.
    pub async fn remove<A: UsersApi + ?Sized>(
        &self,
        api: &A,
        id: UserId,
        ticket: MutationTicket<'_>,
    ) -> Result<MutationOutcome> {
        api.delete_user(id).await?;
        debug!(user_id = id.0, "form: user removed");
        drop(ticket);
        Ok(MutationOutcome::Applied)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
