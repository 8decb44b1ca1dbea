//! Error types for the HTTP provider adapters

use scout_application::GatewayError;
use thiserror::Error;

/// Errors raised while talking to a provider over HTTP
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Response contained no text")]
    EmptyResponse,
}

impl ProviderError {
    /// Message carried by a provider error body, if it has the usual
    /// `{"error": {"message": ...}}` shape
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);
        ProviderError::Status {
            status,
            body: message,
        }
    }
}

impl From<ProviderError> for GatewayError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            ProviderError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            ProviderError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            ProviderError::Status { status: 401 | 403, body } => {
                GatewayError::AuthenticationFailed(body)
            }
            ProviderError::Status { status: 429, body } => GatewayError::RateLimited(body),
            ProviderError::Status { status: 408 | 504, .. } => GatewayError::Timeout,
            e @ ProviderError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            ProviderError::Decode(msg) => GatewayError::InvalidResponse(msg),
            ProviderError::EmptyResponse => {
                GatewayError::InvalidResponse("response contained no text".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let auth: GatewayError = ProviderError::Status {
            status: 401,
            body: "invalid x-api-key".into(),
        }
        .into();
        assert_eq!(auth, GatewayError::AuthenticationFailed("invalid x-api-key".into()));

        let limited: GatewayError = ProviderError::Status {
            status: 429,
            body: "slow down".into(),
        }
        .into();
        assert_eq!(limited, GatewayError::RateLimited("slow down".into()));

        let other: GatewayError = ProviderError::Status {
            status: 500,
            body: "boom".into(),
        }
        .into();
        assert_eq!(other, GatewayError::RequestFailed("API returned 500: boom".into()));
    }

    #[test]
    fn test_error_body_message_is_extracted() {
        let e = ProviderError::from_status(
            400,
            r#"{"type":"error","error":{"type":"invalid_request_error","message":"max_tokens: required"}}"#
                .to_string(),
        );
        assert_eq!(e.to_string(), "API returned 400: max_tokens: required");

        let e = ProviderError::from_status(502, "Bad Gateway".to_string());
        assert_eq!(e.to_string(), "API returned 502: Bad Gateway");
    }
}
