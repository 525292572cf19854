//! Error types for the Qube PM API client.
//!
//! This module provides a single error type covering all failure modes of
//! the client: transport failures, malformed vendor XML, vendor-reported
//! login failures, and client-side validation.

use thiserror::Error;

/// A specialized `Result` type for Qube PM operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Qube PM API operations.
///
/// Note that a non-200 HTTP status is *not* an error: operations hand the
/// raw [`SoapResponse`](crate::SoapResponse) back to the caller, who is
/// responsible for inspecting the status code and content. Only transport
/// failures surface as [`Error::Http`].
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (connection, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Vendor response XML could not be parsed
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The vendor reported a login failure via the status element
    #[error("authentication failed: ErrorCode[{code}] {message}")]
    Authentication {
        /// Vendor error code from the `error-code` attribute
        code: String,
        /// Vendor error message from the `error-message` attribute
        message: String,
    },

    /// A required parameter combination was missing; raised client-side
    /// before any network call
    #[error("validation error: {0}")]
    Validation(String),

    /// Base URL could not be parsed
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if this is a vendor-reported authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Returns `true` if this error was raised client-side before any
    /// request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_message_carries_code_and_text() {
        let err = Error::Authentication {
            code: "104".to_string(),
            message: "Invalid user name or password".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("104"));
        assert!(rendered.contains("Invalid user name or password"));
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_validation_predicate() {
        let err = Error::Validation("missing reference".to_string());
        assert!(err.is_validation());
        assert!(!err.is_auth_error());
    }
}
