/// OAuth 2.0 error codes
/// RFC 6749, Section 5.2: https://tools.ietf.org/html/rfc6749#section-5.2
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// The six standard error codes a token endpoint may return.
///
/// Each code has two stable representations: the snake_case identifier
/// used in the `error` field of the wire response, and a small integer
/// (1 through 6, in declaration order) for host error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidRequest,
    InvalidClient,
    InvalidGrant,
    UnauthorizedClient,
    UnsupportedGrantType,
    InvalidScope,
}

impl ErrorCode {
    /// All codes, in declaration order.
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::InvalidRequest,
        ErrorCode::InvalidClient,
        ErrorCode::InvalidGrant,
        ErrorCode::UnauthorizedClient,
        ErrorCode::UnsupportedGrantType,
        ErrorCode::InvalidScope,
    ];

    /// Get the wire identifier for this code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidClient => "invalid_client",
            Self::InvalidGrant => "invalid_grant",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::UnsupportedGrantType => "unsupported_grant_type",
            Self::InvalidScope => "invalid_scope",
        }
    }

    /// Get the integer form of this code (1 through 6)
    pub fn int_value(&self) -> i32 {
        match self {
            Self::InvalidRequest => 1,
            Self::InvalidClient => 2,
            Self::InvalidGrant => 3,
            Self::UnauthorizedClient => 4,
            Self::UnsupportedGrantType => 5,
            Self::InvalidScope => 6,
        }
    }

    /// Look up a code by its wire identifier
    ///
    /// The match is exact and case-sensitive; no trimming or normalization
    /// is applied. Unrecognized identifiers return `None`.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "invalid_request" => Some(Self::InvalidRequest),
            "invalid_client" => Some(Self::InvalidClient),
            "invalid_grant" => Some(Self::InvalidGrant),
            "unauthorized_client" => Some(Self::UnauthorizedClient),
            "unsupported_grant_type" => Some(Self::UnsupportedGrantType),
            "invalid_scope" => Some(Self::InvalidScope),
            _ => None,
        }
    }

    /// Decode a code from a JSON value
    ///
    /// Succeeds only for a JSON string holding one of the six wire
    /// identifiers. Any other shape yields `None`.
    pub fn decode(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::from_wire)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        const EXPECTED: [&str; 6] = [
            "invalid_request",
            "invalid_client",
            "invalid_grant",
            "unauthorized_client",
            "unsupported_grant_type",
            "invalid_scope",
        ];

        let s = String::deserialize(deserializer)?;
        Self::from_wire(&s).ok_or_else(|| de::Error::unknown_variant(&s, &EXPECTED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_round_trip() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_wire(code.as_str()), Some(code));
        }
    }

    #[test]
    fn test_int_values_are_stable() {
        assert_eq!(ErrorCode::InvalidRequest.int_value(), 1);
        assert_eq!(ErrorCode::InvalidClient.int_value(), 2);
        assert_eq!(ErrorCode::InvalidGrant.int_value(), 3);
        assert_eq!(ErrorCode::UnauthorizedClient.int_value(), 4);
        assert_eq!(ErrorCode::UnsupportedGrantType.int_value(), 5);
        assert_eq!(ErrorCode::InvalidScope.int_value(), 6);
    }

    #[test]
    fn test_int_values_are_unique() {
        let mut seen: Vec<i32> = ErrorCode::ALL.iter().map(|c| c.int_value()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn test_decode_accepts_exact_strings_only() {
        assert_eq!(
            ErrorCode::decode(&json!("invalid_grant")),
            Some(ErrorCode::InvalidGrant)
        );
        assert_eq!(ErrorCode::decode(&json!("Invalid_Grant")), None);
        assert_eq!(ErrorCode::decode(&json!(" invalid_grant")), None);
        assert_eq!(ErrorCode::decode(&json!("not_a_real_code")), None);
    }

    #[test]
    fn test_decode_rejects_non_strings() {
        assert_eq!(ErrorCode::decode(&json!(3)), None);
        assert_eq!(ErrorCode::decode(&json!(null)), None);
        assert_eq!(ErrorCode::decode(&json!(["invalid_grant"])), None);
        assert_eq!(ErrorCode::decode(&json!({"error": "invalid_grant"})), None);
    }

    #[test]
    fn test_display_matches_wire_string() {
        for code in ErrorCode::ALL {
            assert_eq!(code.to_string(), code.as_str());
        }
    }

    #[test]
    fn test_serde_round_trip() {
        for code in ErrorCode::ALL {
            let encoded = serde_json::to_string(&code).unwrap();
            assert_eq!(encoded, format!("\"{}\"", code.as_str()));

            let decoded: ErrorCode = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, code);
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown_identifier() {
        let result = serde_json::from_str::<ErrorCode>("\"server_error\"");
        assert!(result.is_err());
    }
}
