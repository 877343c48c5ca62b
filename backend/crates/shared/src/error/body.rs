//! Error Body
//!
//! JSON shape of every error response:
//!
//! ```json
//! { "statusCode": 400, "error": "Bad Request", "message": "User with this email already exists" }
//! ```

use serde::Serialize;

use super::kind::ErrorKind;

/// Error response body
///
/// `statusCode` and `error` both come from the client-facing [`ErrorKind`],
/// so they always agree with the HTTP status sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status_code: kind.status_code(),
            error: kind.reason(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_shape() {
        let body = ErrorBody::new(ErrorKind::Unauthorized, "Invalid credentials");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "statusCode": 401,
                "error": "Unauthorized",
                "message": "Invalid credentials",
            })
        );
    }
}
