use crate::exception::CategoryInfo;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer};

/// Standard error envelope returned for every failed request
///
/// # Example
/// ```
/// use gamification_errors::common::ErrorResponse;
/// use gamification_errors::exception::ErrorCategory;
///
/// let body = ErrorResponse::new(
///     ErrorCategory::FrameworkException.info(),
///     "Request method 'DELETE' is not supported",
///     Vec::new(),
/// );
/// assert_eq!(body.status.as_u16(), 400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    pub internal_code: &'static str,
    pub client_message: &'static str,
    pub developer_message: String,
    pub field_errors: Vec<String>,
}

impl ErrorResponse {
    /// Build a response whose status and codes come from `category`
    pub fn new(
        category: &'static CategoryInfo,
        developer_message: impl Into<String>,
        field_errors: Vec<String>,
    ) -> Self {
        Self {
            status: category.status,
            internal_code: category.internal_code,
            client_message: category.client_message,
            developer_message: developer_message.into(),
            field_errors,
        }
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        // The body's status field and the HTTP status are the same value
        (self.status, Json(self)).into_response()
    }
}
