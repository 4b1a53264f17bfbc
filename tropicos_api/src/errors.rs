//! Error types for the API client.

use crate::Format;

/// Characters of an error body shown in [`Error::HttpStatus`] messages.
const BODY_PREVIEW_CHARS: usize = 200;

fn body_preview(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}

/// Errors that can occur when configuring the client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client configuration is unusable (e.g. missing API key).
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// The transport failed (network error, timeout, or client build failure).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status. `body` is the full response body;
    /// the message shows only its first 200 characters.
    #[error("Request failed with status {status}: {}", body_preview(.body))]
    HttpStatus { status: u16, body: String },
    /// The response body did not match the declared shape.
    #[error("Failed to decode {format} response")]
    Decode {
        format: Format,
        #[source]
        source: serde_json::Error,
    },
    /// No decoder exists for the response format; read the raw body instead.
    #[error("Decoding {0} responses is not supported")]
    UnsupportedFormat(Format),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_includes_body() {
        let err = Error::HttpStatus {
            status: 401,
            body: "Invalid API key\n".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 401: Invalid API key");
    }

    #[test]
    fn test_http_status_message_truncates_long_body() {
        let body = "é".repeat(BODY_PREVIEW_CHARS + 50);
        let err = Error::HttpStatus {
            status: 500,
            body: body.clone(),
        };
        let expected = format!(
            "Request failed with status 500: {}...",
            "é".repeat(BODY_PREVIEW_CHARS)
        );
        assert_eq!(err.to_string(), expected);
        match err {
            Error::HttpStatus { body: kept, .. } => assert_eq!(kept, body),
            _ => unreachable!(),
        }
    }
}
