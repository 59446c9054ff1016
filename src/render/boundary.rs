use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::error::ClientError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("missing data: {0}")]
    MissingData(String),

    #[error("render panicked: {0}")]
    Panic(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Actions offered by the recovery screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    RetryRender,
    NavigateHome,
    Reload,
}

impl RecoveryAction {
    pub const ALL: [Self; 3] = [Self::RetryRender, Self::NavigateHome, Self::Reload];

    pub fn label(self) -> &'static str {
        match self {
            Self::RetryRender => "Try again",
            Self::NavigateHome => "Go home",
            Self::Reload => "Reload page",
        }
    }
}

/// Replaces the whole page body after a render failure
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryScreen {
    pub message: String,
    pub actions: [RecoveryAction; 3],
}

impl fmt::Display for RecoveryScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Something went wrong")?;
        writeln!(f, "{}", self.message)?;
        let labels: Vec<String> = self
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("[{}] {}", i + 1, action.label()))
            .collect();
        write!(f, "{}", labels.join("  "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Page(String),
    Fallback(RecoveryScreen),
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(body) => f.write_str(body),
            Self::Fallback(screen) => screen.fmt(f),
        }
    }
}

/// Destination for caught render failures
pub trait ErrorReporter: Send + Sync {
    fn report(&self, err: &RenderError);
}

/// Logs only; no external error reporting service is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, err: &RenderError) {
        error!("render failed: {err}");
    }
}

/// Runs a render pass and swaps in the recovery screen on failure or panic
#[derive(Clone)]
pub struct ErrorBoundary {
    reporter: Arc<dyn ErrorReporter>,
}

impl Default for ErrorBoundary {
    fn default() -> Self {
        Self::new(Arc::new(LogReporter))
    }
}

impl ErrorBoundary {
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { reporter }
    }

    pub fn render<F>(&self, render: F) -> Rendered
    where
        F: FnOnce() -> Result<String, RenderError>,
    {
        let err = match panic::catch_unwind(AssertUnwindSafe(render)) {
            Ok(Ok(body)) => return Rendered::Page(body),
            Ok(Err(err)) => err,
            Err(payload) => RenderError::Panic(panic_message(payload.as_ref())),
        };

        self.reporter.report(&err);
        Rendered::Fallback(RecoveryScreen {
            message: err.to_string(),
            actions: RecoveryAction::ALL,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<String>>);

    impl ErrorReporter for Collect {
        fn report(&self, err: &RenderError) {
            self.0.lock().unwrap().push(err.to_string());
        }
    }

    #[test]
    fn passes_successful_render_through() {
        let rendered = ErrorBoundary::default().render(|| Ok("table".to_string()));
        assert_eq!(rendered, Rendered::Page("table".into()));
    }

    #[test]
    fn error_becomes_recovery_screen() {
        let reporter = Arc::new(Collect::default());
        let boundary = ErrorBoundary::new(reporter.clone());

        let rendered = boundary.render(|| Err(RenderError::MissingData("rental list".into())));

        match rendered {
            Rendered::Fallback(screen) => {
                assert_eq!(screen.message, "missing data: rental list");
                assert_eq!(screen.actions, RecoveryAction::ALL);
                assert!(screen.to_string().contains("[3] Reload page"));
            }
            other => panic!("expected fallback, got {other:?}"),
        }
        assert_eq!(reporter.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn panic_is_caught() {
        let reporter = Arc::new(Collect::default());
        let boundary = ErrorBoundary::new(reporter.clone());

        let rendered = boundary.render(|| panic!("row {} has no id", 3));

        assert!(matches!(
            rendered,
            Rendered::Fallback(ref screen) if screen.message == "render panicked: row 3 has no id"
        ));
        assert_eq!(
            reporter.0.lock().unwrap().as_slice(),
            ["render panicked: row 3 has no id"]
        );
    }
}
