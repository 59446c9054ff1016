use async_trait::async_trait;
use serde_json::Value;

use super::types::{FetchPolicy, GraphQlRequest};
use crate::error::ClientError;
use crate::operations::{Operation, OperationKind};

/// Request pipeline shared by every page.
///
/// Implementations return the `data` object of a successful response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &GraphQlRequest, policy: FetchPolicy)
        -> Result<Value, ClientError>;
}

/// Run a typed operation and decode its root field.
///
/// Mutations ignore `policy` and always reach the network.
pub async fn execute<O: Operation>(
    transport: &dyn Transport,
    variables: &O::Variables,
    policy: FetchPolicy,
) -> Result<O::Output, ClientError> {
    let request = GraphQlRequest::new::<O>(variables)?;
    let policy = match O::KIND {
        OperationKind::Query => policy,
        OperationKind::Mutation => FetchPolicy::NetworkOnly,
    };

    let mut data = transport.send(&request, policy).await?;
    let root = data
        .get_mut(O::ROOT_FIELD)
        .map(Value::take)
        .filter(|value| !value.is_null())
        .ok_or_else(|| ClientError::MissingData(O::NAME.to_string()))?;

    serde_json::from_value(root).map_err(|source| ClientError::Decode {
        operation: O::NAME.to_string(),
        source,
    })
}
