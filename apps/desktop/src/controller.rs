//! Routes parsed commands to the user manager and reports what happened.

use client_core::{ConfirmPrompt, MutationOutcome, UserManager, UsersApi};

use crate::commands::{Command, HELP};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Re-render the view, optionally with a one-line status.
    Render(Option<String>),
    /// Print text without re-rendering.
    Print(String),
    Quit,
}

pub async fn dispatch<A, P>(manager: &UserManager<A, P>, cmd: Command) -> Flow
where
    A: UsersApi,
    P: ConfirmPrompt,
{
    let cmd_name = match &cmd {
        Command::List => "list",
        Command::Refresh => "refresh",
        Command::Set { .. } => "set",
        Command::Edit { .. } => "edit",
        Command::Cancel => "cancel",
        Command::Save => "save",
        Command::Delete { .. } => "delete",
        Command::Help => "help",
        Command::Quit => "quit",
    };
    tracing::debug!(command = cmd_name, "dispatching command");

    match cmd {
        Command::List => Flow::Render(None),
        Command::Refresh => {
            manager.refresh().await;
            Flow::Render(None)
        }
        Command::Set { field, value } => {
            manager.update_field(field, value).await;
            Flow::Render(None)
        }
        Command::Edit { id } => {
            if manager.begin_edit_by_id(id).await {
                Flow::Render(None)
            } else {
                Flow::Render(Some(format!("no listed user with id {id}")))
            }
        }
        Command::Cancel => {
            manager.cancel().await;
            Flow::Render(None)
        }
        Command::Save => {
            let missing = manager.snapshot().await.draft.missing_fields();
            if let Some(field) = missing.first() {
                return Flow::Render(Some(format!("{} is required", field.label())));
            }
            let outcome = manager.submit().await;
            Flow::Render(status_for(outcome, "user saved"))
        }
        Command::Delete { id } => {
            let outcome = manager.remove(id).await;
            Flow::Render(status_for(outcome, "user deleted"))
        }
        Command::Help => Flow::Print(HELP.to_string()),
        Command::Quit => Flow::Quit,
    }
}

fn status_for(outcome: MutationOutcome, applied: &str) -> Option<String> {
    match outcome {
        MutationOutcome::Applied => Some(applied.to_string()),
        MutationOutcome::Declined => Some("cancelled".to_string()),
        MutationOutcome::Busy => Some("another request is still in progress; retry".to_string()),
        MutationOutcome::Failed => None,
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
