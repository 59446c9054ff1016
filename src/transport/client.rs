use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::auth::{FileTokenSource, MemoryTokenSource, TokenSource};
use super::cache::{CacheSnapshot, ResultCache, DEFAULT_CACHE_CAPACITY};
use super::observer::{ErrorObserver, LoggingObserver};
use super::traits::Transport;
use super::types::{FetchPolicy, GraphQlRequest, GraphQlResponse};
use crate::config::Config;
use crate::error::ClientError;
use crate::operations::OperationKind;

static SHARED: OnceCell<Arc<GraphQlClient>> = OnceCell::const_new();

/// GraphQL client over reqwest.
///
/// Attaches the current bearer token to every request, runs the registered
/// error observers on failure and never retries.
pub struct GraphQlClient {
    http: Client,
    endpoint: String,
    tokens: Arc<dyn TokenSource>,
    cache: ResultCache,
    observers: Vec<Arc<dyn ErrorObserver>>,
}

impl GraphQlClient {
    pub fn builder(endpoint: impl Into<String>) -> GraphQlClientBuilder {
        GraphQlClientBuilder::new(endpoint)
    }

    /// Client configured from the environment
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let mut builder = Self::builder(&config.graphql_url)
            .token_source(Arc::new(FileTokenSource::new(config.token_path.clone())));
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Process-wide client, created on first use.
    ///
    /// A snapshot passed on any call is merged into the shared cache.
    pub async fn shared(
        config: &Config,
        snapshot: Option<CacheSnapshot>,
    ) -> Result<Arc<Self>, ClientError> {
        let client = SHARED
            .get_or_try_init(|| async {
                info!("initializing shared graphql client for {}", config.graphql_url);
                Self::from_config(config).map(Arc::new)
            })
            .await?;

        if let Some(snapshot) = snapshot {
            client.restore(snapshot);
        }
        Ok(Arc::clone(client))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn token_source(&self) -> &Arc<dyn TokenSource> {
        &self.tokens
    }

    /// Serialize cached results for a new execution context
    pub fn extract(&self) -> CacheSnapshot {
        self.cache.extract()
    }

    pub fn restore(&self, snapshot: CacheSnapshot) {
        debug!("restoring {} cached results", snapshot.0.len());
        self.cache.restore(snapshot);
    }

    async fn build_request(
        &self,
        request: &GraphQlRequest,
    ) -> Result<reqwest::Request, ClientError> {
        let mut builder = self.http.post(&self.endpoint).json(request);
        if let Some(token) = self.tokens.get_token().await {
            builder = builder.bearer_auth(token);
        }
        Ok(builder.build()?)
    }

    async fn dispatch(&self, request: &GraphQlRequest) -> Result<Value, ClientError> {
        let http_request = self.build_request(request).await?;
        let response = self.http.execute(http_request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("{} answered with status {status}", request.operation_name);

        parse_response(request.operation_name, status, &body)
    }

    fn observe(&self, operation: &str, err: &ClientError) {
        for observer in &self.observers {
            observer.observe(operation, err);
        }
    }
}

#[async_trait]
impl Transport for GraphQlClient {
    async fn send(
        &self,
        request: &GraphQlRequest,
        policy: FetchPolicy,
    ) -> Result<Value, ClientError> {
        let is_query = request.kind == OperationKind::Query;
        let key = request.cache_key();

        if is_query && policy == FetchPolicy::CacheFirst {
            if let Some(hit) = self.cache.get(&key) {
                debug!("{} served from cache", request.operation_name);
                return Ok(hit);
            }
        }

        info!("sending {}", request.operation_name);
        match self.dispatch(request).await {
            Ok(data) => {
                if is_query {
                    self.cache.put(key, data.clone());
                }
                Ok(data)
            }
            Err(e) => {
                self.observe(request.operation_name, &e);
                Err(e)
            }
        }
    }
}

/// Turn a raw HTTP answer into the `data` object.
///
/// GraphQL errors take precedence over the status code, since servers report
/// them with both 200 and 4xx statuses. The status is kept on the error so a
/// 401 still classifies as unauthorized.
pub(crate) fn parse_response(
    operation: &str,
    status: u16,
    body: &str,
) -> Result<Value, ClientError> {
    let success = (200..300).contains(&status);

    match serde_json::from_str::<GraphQlResponse>(body) {
        Ok(response) if !response.errors.is_empty() => Err(ClientError::GraphQl {
            status,
            errors: response.errors,
        }),
        Ok(response) if success => response
            .data
            .filter(|data| !data.is_null())
            .ok_or_else(|| ClientError::MissingData(operation.to_string())),
        _ if !success => Err(ClientError::Status {
            status,
            body: body.to_string(),
        }),
        Ok(_) => Err(ClientError::MissingData(operation.to_string())),
        Err(source) => Err(ClientError::Decode {
            operation: operation.to_string(),
            source,
        }),
    }
}

pub struct GraphQlClientBuilder {
    endpoint: String,
    tokens: Option<Arc<dyn TokenSource>>,
    observers: Vec<Arc<dyn ErrorObserver>>,
    timeout: Option<std::time::Duration>,
    cache_capacity: usize,
    snapshot: Option<CacheSnapshot>,
}

impl GraphQlClientBuilder {
    fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            tokens: None,
            observers: vec![Arc::new(LoggingObserver)],
            timeout: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            snapshot: None,
        }
    }

    pub fn token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Register an extra observer; the logging observer is always present.
    pub fn observer(mut self, observer: Arc<dyn ErrorObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Most query results kept for `CacheFirst` reads and snapshots
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Rehydrate the cache from a snapshot taken by another client
    pub fn restore(mut self, snapshot: CacheSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn build(self) -> Result<GraphQlClient, ClientError> {
        if self.endpoint.trim().is_empty() {
            return Err(ClientError::Config("graphql endpoint is empty".into()));
        }

        let mut http = Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        let cache = ResultCache::with_capacity(self.cache_capacity);
        if let Some(snapshot) = self.snapshot {
            cache.restore(snapshot);
        }

        Ok(GraphQlClient {
            http: http.build()?,
            endpoint: self.endpoint,
            tokens: self
                .tokens
                .unwrap_or_else(|| Arc::new(MemoryTokenSource::default())),
            cache,
            observers: self.observers,
        })
    }
}
