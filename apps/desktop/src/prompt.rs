use std::{io::Write as _, sync::Arc};

use async_trait::async_trait;
use client_core::ConfirmPrompt;
use tokio::{
    io::{AsyncBufReadExt, BufReader, Lines, Stdin},
    sync::Mutex,
};

pub type InputLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

pub fn stdin_lines() -> InputLines {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()))
}

/// Asks `[y/N]` on the terminal, reading the answer from the shared stdin.
/// With `assume_yes` every question is answered yes without asking.
pub struct TerminalPrompt {
    input: InputLines,
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(input: InputLines, assume_yes: bool) -> Self {
        Self { input, assume_yes }
    }
}

#[async_trait]
impl ConfirmPrompt for TerminalPrompt {
    async fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{message} [y/N] ");
        let _ = std::io::stdout().flush();

        match self.input.lock().await.next_line().await {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(err) => {
                tracing::warn!("failed to read confirmation: {err}");
                false
            }
        }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    )
}
