/// Conversion into a host error record
use crate::error::OAuthError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Error domain reported for every converted OAuth error.
pub const OAUTH_ERROR_DOMAIN: &str = "OAuthErrorDomain";

/// User-info key under which the `error_uri` string is stored.
pub const OAUTH_URI_ERROR_KEY: &str = "OAuthURIErrorKey";

/// User-info key under which the retained raw payload is stored.
pub const OAUTH_JSON_ERROR_KEY: &str = "JSONErrorKey";

/// A decoded OAuth error reformatted for host error reporting
///
/// Platforms with a structured native error type (NSError on Apple
/// platforms, for instance) build theirs from this record: a fixed domain,
/// the 1-6 integer code, a localized description, and a user-info bag
/// holding the reference URI and raw payload under stable keys.
///
/// The conversion is total; it never decodes, only reformats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostError {
    pub domain: &'static str,
    pub code: i32,
    pub localized_description: Option<String>,
    pub user_info: Map<String, Value>,
}

impl OAuthError {
    /// Reformat this error for host error reporting
    ///
    /// The domain is always [`OAUTH_ERROR_DOMAIN`] and the code is the
    /// integer form of [`code`](OAuthError::code). `user_info` carries the
    /// URI under [`OAUTH_URI_ERROR_KEY`] and the raw payload under
    /// [`OAUTH_JSON_ERROR_KEY`], each only when present.
    pub fn host_error(&self) -> HostError {
        let mut user_info = Map::new();

        if let Some(uri) = &self.uri {
            user_info.insert(OAUTH_URI_ERROR_KEY.to_string(), Value::String(uri.clone()));
        }

        if let Some(json) = &self.json {
            user_info.insert(
                OAUTH_JSON_ERROR_KEY.to_string(),
                Value::Object(json.clone()),
            );
        }

        HostError {
            domain: OAUTH_ERROR_DOMAIN,
            code: self.code.int_value(),
            localized_description: self.description.clone(),
            user_info,
        }
    }
}

impl From<&OAuthError> for HostError {
    fn from(error: &OAuthError) -> Self {
        error.host_error()
    }
}
