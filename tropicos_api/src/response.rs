//! The raw response handed back by every operation.

use std::marker::PhantomData;

use reqwest::{header::HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::{Error, Format};

/// Status, headers, and body of a successful response, tagged with the shape
/// `T` the endpoint is documented to return.
///
/// The body is kept exactly as received. Nothing is decoded until
/// [`ApiResponse::data`] is called.
pub struct ApiResponse<T> {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
    format: Format,
    _shape: PhantomData<fn() -> T>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: String, format: Format) -> Self {
        Self {
            status,
            headers,
            body,
            format,
            _shape: PhantomData,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The format the body was requested in.
    pub fn format(&self) -> Format {
        self.format
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes the body into the declared shape. Only JSON bodies can be
    /// decoded; XML responses return [`Error::UnsupportedFormat`].
    pub fn data(&self) -> Result<T, Error> {
        match self.format {
            Format::Json => serde_json::from_str(&self.body).map_err(|source| Error::Decode {
                format: self.format,
                source,
            }),
            Format::Xml => Err(Error::UnsupportedFormat(self.format)),
        }
    }
}

impl<T> std::fmt::Debug for ApiResponse<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiResponse")
            .field("status", &self.status)
            .field("format", &self.format)
            .field("body_len", &self.body.len())
            .finish()
    }
}
