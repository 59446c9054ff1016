pub mod auth;
pub mod cache;
pub mod client;
pub mod observer;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use auth::{FileTokenSource, MemoryTokenSource, TokenSource};
pub use cache::{CacheSnapshot, ResultCache};
pub use client::{GraphQlClient, GraphQlClientBuilder};
pub use observer::{ErrorObserver, LoggingObserver};
pub use traits::{execute, Transport};
pub use types::{FetchPolicy, GraphQlError, GraphQlRequest, GraphQlResponse};
