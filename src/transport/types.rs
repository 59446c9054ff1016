use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;
use crate::operations::{Operation, OperationKind};

/// Whether a query may be answered from the local result cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Always go to the network; the result still refreshes the cache
    #[default]
    NetworkOnly,
    /// Answer from the cache when an entry exists
    CacheFirst,
}

/// Body of a GraphQL POST
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: Value,
    #[serde(skip)]
    pub kind: OperationKind,
}

impl GraphQlRequest {
    pub fn new<O: Operation>(variables: &O::Variables) -> Result<Self, ClientError> {
        let variables = serde_json::to_value(variables).map_err(|source| ClientError::Encode {
            operation: O::NAME.to_string(),
            source,
        })?;

        Ok(Self {
            operation_name: O::NAME,
            query: O::DOCUMENT,
            variables,
            kind: O::KIND,
        })
    }

    /// Cache key: operation name plus compact variables
    pub fn cache_key(&self) -> String {
        format!("{}:{}", self.operation_name, self.variables)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// Application-level error reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<Value>,
    #[serde(default)]
    pub locations: Vec<ErrorLocation>,
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl GraphQlError {
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.get("code")?.as_str()
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.code() == Some("UNAUTHENTICATED")
    }
}
