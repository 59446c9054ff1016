use thiserror::Error;

use crate::transport::GraphQlError;

/// Errors surfaced by the transport and the controllers built on it
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// GraphQL `errors`, with the HTTP status they arrived with
    #[error("graphql error: {}", first_message(.errors))]
    GraphQl {
        status: u16,
        errors: Vec<GraphQlError>,
    },

    #[error("failed to encode variables for `{operation}`: {source}")]
    Encode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode `{operation}` response: {source}")]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response for `{0}` carried no data")]
    MissingData(String),

    #[error("invalid client configuration: {0}")]
    Config(String),
}

fn first_message(errors: &[GraphQlError]) -> &str {
    errors
        .first()
        .map(|e| e.message.as_str())
        .unwrap_or("unknown error")
}

impl ClientError {
    /// 401-class failure: HTTP 401 or a GraphQL `UNAUTHENTICATED` error
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 401,
            Self::GraphQl { status, errors } => {
                *status == 401 || errors.iter().any(GraphQlError::is_unauthenticated)
            }
            Self::Network(e) => e.status().is_some_and(|s| s.as_u16() == 401),
            _ => false,
        }
    }

    /// Text shown to the user in an error dialog
    pub fn user_message(&self) -> String {
        match self {
            Self::GraphQl { errors, .. } => first_message(errors).to_string(),
            _ if self.is_unauthorized() => "Please log in first.".to_string(),
            Self::Network(_) | Self::Status { .. } => {
                "Network error, please try again later.".to_string()
            }
            _ => "Something went wrong!".to_string(),
        }
    }
}
