use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Where the transport reads the current access token from
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Current token, `None` when logged out
    async fn get_token(&self) -> Option<String>;

    /// Forget the stored token
    async fn log_out(&self);
}

/// Token persisted in a file, re-read before every request
#[derive(Debug, Clone)]
pub struct FileTokenSource {
    path: PathBuf,
}

impl FileTokenSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persist a token for later requests
    pub async fn store(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, token).await
    }
}

#[async_trait]
impl TokenSource for FileTokenSource {
    async fn get_token(&self) -> Option<String> {
        let token = tokio::fs::read_to_string(&self.path).await.ok()?;
        let token = token.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    async fn log_out(&self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => debug!("removed token file {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("failed to remove token file {}: {e}", self.path.display()),
        }
    }
}

/// In-process token holder
#[derive(Debug, Default)]
pub struct MemoryTokenSource {
    token: RwLock<Option<String>>,
}

impl MemoryTokenSource {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }

    pub async fn set(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }
}

#[async_trait]
impl TokenSource for MemoryTokenSource {
    async fn get_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn log_out(&self) {
        *self.token.write().await = None;
    }
}
