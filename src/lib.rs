//! Absage - Typed OAuth 2.0 error responses
//!
//! This library models the error body an authorization server returns when
//! a token request fails (RFC 6749 Section 5.2) and decodes it into a
//! typed, queryable value instead of raw JSON.
//!
//! # Features
//!
//! - The six standard OAuth error codes with stable wire-string and
//!   integer forms
//! - Decoding from raw response bytes or a parsed JSON object, with
//!   graceful failure on malformed input
//! - Conversion into a host error record (domain, code, user-info bag)
//!   for platform error reporting
//! - C FFI for cross-language compatibility
//!
//! # Example
//!
//! ```
//! use absage::prelude::*;
//!
//! let body = br#"{
//!     "error": "invalid_grant",
//!     "error_description": "The refresh token has expired"
//! }"#;
//!
//! let error = OAuthError::decode_from_bytes(body).expect("decodable error body");
//! assert_eq!(error.code, ErrorCode::InvalidGrant);
//!
//! let host = error.host_error();
//! assert_eq!(host.domain, OAUTH_ERROR_DOMAIN);
//! assert_eq!(host.code, 3);
//! ```

pub mod code;
pub mod error;
pub mod ffi;
pub mod host;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::code::ErrorCode;
    pub use crate::error::OAuthError;
    pub use crate::host::{
        HostError, OAUTH_ERROR_DOMAIN, OAUTH_JSON_ERROR_KEY, OAUTH_URI_ERROR_KEY,
    };
}
