//! Response envelope shared by every endpoint.

use serde::Serialize;

/// The `{ success, message, data? }` envelope.
///
/// Success responses carry a payload under `data`; failure responses are
/// produced by [`crate::error::AppError`] and omit it.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Builds a success envelope with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = ApiResponse::ok("Done.", 7);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Done.");
        assert_eq!(json["data"], 7);
    }
}
