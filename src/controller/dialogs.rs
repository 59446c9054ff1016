use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

/// User-facing prompts and notifications, injected into controllers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Blocking confirmation; `true` only on explicit affirmation
    async fn confirm(&self, message: &str) -> bool;

    /// Error dialog for a failed action
    async fn error(&self, message: &str);

    /// Non-blocking notification
    async fn notify(&self, message: &str);
}

/// Terminal implementation: prints to stdout, reads answers from stdin
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDialogs;

#[async_trait]
impl Dialogs for ConsoleDialogs {
    async fn confirm(&self, message: &str) -> bool {
        println!("{message} [y/N]");

        let mut answer = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        if let Err(e) = stdin.read_line(&mut answer).await {
            warn!("failed to read confirmation: {e}");
            return false;
        }
        is_affirmative(&answer)
    }

    async fn error(&self, message: &str) {
        eprintln!("❌ {message}");
    }

    async fn notify(&self, message: &str) {
        println!("ℹ️  {message}");
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
