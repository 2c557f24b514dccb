//! Translation of inbound errors into [`ErrorResponse`] values
//!
//! All operations are pure: the same input always renders the same body.

use super::{BindingResult, ErrorCategory, FrameworkError, InboundError};
use crate::common::ErrorResponse;
use crate::error::DomainError;
use strum_macros::{Display, EnumString};

const EXCEPTION_MESSAGE: &str = "Exception message:";

/// How the category prefix and the raw exception message are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MessageStyle {
    /// Wire-compatible rendering: validation and missing-parameter paths
    /// append `Exception message:` with no spaces, framework and unhandled
    /// paths append the message directly to the prefix.
    #[default]
    Legacy,
    /// Every path renders `<prefix> Exception message: <message>`
    Normalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorTranslator {
    style: MessageStyle,
}

impl ErrorTranslator {
    pub fn new(style: MessageStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> MessageStyle {
        self.style
    }

    /// Translate any inbound error. Never fails.
    pub fn translate(&self, error: &InboundError) -> ErrorResponse {
        match error {
            InboundError::Domain(e) => self.translate_domain_error(e),
            InboundError::Validation(result) => self.translate_validation_error(result),
            InboundError::MissingParameter { name, message } => {
                self.translate_missing_parameter_error(name, message)
            }
            InboundError::Framework(e) => self.translate_framework_error(e),
            InboundError::Unhandled(e) => self.translate_unhandled_error(e),
        }
    }

    pub fn translate_domain_error(&self, error: &DomainError) -> ErrorResponse {
        let info = ErrorCategory::DomainException.info();
        tracing::debug!(category = %ErrorCategory::DomainException, "{}", error);

        ErrorResponse::new(
            info,
            format!("{}: {}", info.client_message, error.message()),
            Vec::new(),
        )
    }

    pub fn translate_validation_error(&self, result: &BindingResult) -> ErrorResponse {
        let info = ErrorCategory::ValidationFailed.info();
        tracing::debug!(
            category = %ErrorCategory::ValidationFailed,
            object = result.object_name(),
            errors = result.error_count(),
            "request validation failed"
        );

        let field_errors = result
            .field_errors()
            .iter()
            .map(|e| format!("{} : {}", e.field, e.message))
            .chain(
                result
                    .global_errors()
                    .iter()
                    .map(|e| format!("{} : {}", e.object_name, e.message)),
            )
            .collect();

        ErrorResponse::new(
            info,
            self.labelled(info.developer_message, &result.summary()),
            field_errors,
        )
    }

    pub fn translate_missing_parameter_error(&self, name: &str, message: &str) -> ErrorResponse {
        let info = ErrorCategory::MissingParameter.info();
        tracing::debug!(category = %ErrorCategory::MissingParameter, parameter = name, "{}", message);

        ErrorResponse::new(
            info,
            self.labelled(info.developer_message, message),
            vec![format!("{} parameter is missing", name)],
        )
    }

    pub fn translate_framework_error(&self, error: &FrameworkError) -> ErrorResponse {
        let info = ErrorCategory::FrameworkException.info();
        tracing::debug!(category = %ErrorCategory::FrameworkException, kind = %error.kind, "{}", error);

        ErrorResponse::new(
            info,
            self.appended(info.developer_message, &error.message),
            Vec::new(),
        )
    }

    pub fn translate_unhandled_error(&self, error: &anyhow::Error) -> ErrorResponse {
        let info = ErrorCategory::Unhandled.info();
        tracing::error!(category = %ErrorCategory::Unhandled, "unhandled error: {:#}", error);

        ErrorResponse::new(
            info,
            self.appended(info.developer_message, &error.to_string()),
            Vec::new(),
        )
    }

    fn labelled(&self, prefix: &str, message: &str) -> String {
        match self.style {
            MessageStyle::Legacy => format!("{}{}{}", prefix, EXCEPTION_MESSAGE, message),
            MessageStyle::Normalized => normalized(prefix, message),
        }
    }

    fn appended(&self, prefix: &str, message: &str) -> String {
        match self.style {
            MessageStyle::Legacy => format!("{}{}", prefix, message),
            MessageStyle::Normalized => normalized(prefix, message),
        }
    }
}

fn normalized(prefix: &str, message: &str) -> String {
    format!("{} {} {}", prefix, EXCEPTION_MESSAGE, message)
}
