use axum::http::StatusCode;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Fixed classification of a failed request
///
/// Every variant maps to one immutable [`CategoryInfo`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    DomainException,
    ValidationFailed,
    MissingParameter,
    FrameworkException,
    Unhandled,
}

/// Display strings and codes attached to an [`ErrorCategory`]
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub status: StatusCode,
    pub internal_code: &'static str,
    pub client_message: &'static str,
    pub developer_message: &'static str,
}

static DOMAIN_EXCEPTION: CategoryInfo = CategoryInfo {
    status: StatusCode::BAD_REQUEST,
    internal_code: "GMF-F1-D1",
    client_message: "Gamification exception",
    developer_message: "The request violates a gamification business rule.",
};

static VALIDATION_FAILED: CategoryInfo = CategoryInfo {
    status: StatusCode::BAD_REQUEST,
    internal_code: "GMF-F2-D2",
    client_message: "Request validation failed",
    developer_message: "The request body did not pass validation.",
};

static MISSING_PARAMETER: CategoryInfo = CategoryInfo {
    status: StatusCode::BAD_REQUEST,
    internal_code: "GMF-F3-D3",
    client_message: "Required request parameter is missing",
    developer_message: "The request does not contain a required parameter.",
};

static FRAMEWORK_EXCEPTION: CategoryInfo = CategoryInfo {
    status: StatusCode::BAD_REQUEST,
    internal_code: "GMF-F4-D4",
    client_message: "Bad request",
    developer_message: "The request could not be processed by the web layer.",
};

static UNHANDLED: CategoryInfo = CategoryInfo {
    status: StatusCode::INTERNAL_SERVER_ERROR,
    internal_code: "GMF-F5-D5",
    client_message: "Internal server error",
    developer_message: "An unexpected error occurred while handling the request.",
};

impl ErrorCategory {
    /// Look up the static record for this category
    pub fn info(self) -> &'static CategoryInfo {
        match self {
            ErrorCategory::DomainException => &DOMAIN_EXCEPTION,
            ErrorCategory::ValidationFailed => &VALIDATION_FAILED,
            ErrorCategory::MissingParameter => &MISSING_PARAMETER,
            ErrorCategory::FrameworkException => &FRAMEWORK_EXCEPTION,
            ErrorCategory::Unhandled => &UNHANDLED,
        }
    }

    pub fn status(self) -> StatusCode {
        self.info().status
    }
}
