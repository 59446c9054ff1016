use tracing::{error, warn};

use crate::error::ClientError;

/// Hook run for every failed operation
pub trait ErrorObserver: Send + Sync {
    fn observe(&self, operation: &str, error: &ClientError);
}

/// Logs failures; 401-class responses are flagged but never retried.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl ErrorObserver for LoggingObserver {
    fn observe(&self, operation: &str, err: &ClientError) {
        match err {
            ClientError::GraphQl { errors, .. } => {
                for e in errors {
                    error!(
                        operation,
                        path = ?e.path,
                        locations = ?e.locations,
                        "[GraphQL error]: {}",
                        e.message
                    );
                }
            }
            ClientError::Network(e) => error!(operation, "[Network error]: {e}"),
            other => error!(operation, "{other}"),
        }

        if err.is_unauthorized() {
            warn!(operation, "unauthorized response, token refresh is not implemented");
        }
    }
}
