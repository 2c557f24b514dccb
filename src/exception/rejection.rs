//! Conversions from axum extractor rejections

use super::{FrameworkErrorKind, InboundError};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

impl From<JsonRejection> for InboundError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::MissingJsonContentType(_) => FrameworkErrorKind::MediaTypeNotSupported,
            JsonRejection::JsonSyntaxError(_)
            | JsonRejection::JsonDataError(_)
            | JsonRejection::BytesRejection(_) => FrameworkErrorKind::MessageNotReadable,
            _ => FrameworkErrorKind::RequestBinding,
        };
        InboundError::framework(kind, rejection.body_text())
    }
}

impl From<QueryRejection> for InboundError {
    fn from(rejection: QueryRejection) -> Self {
        let message = rejection.body_text();
        match missing_field(&message) {
            Some(name) => InboundError::missing_parameter(name),
            None => InboundError::framework(FrameworkErrorKind::TypeMismatch, message),
        }
    }
}

impl From<PathRejection> for InboundError {
    fn from(rejection: PathRejection) -> Self {
        let kind = match &rejection {
            PathRejection::MissingPathParams(_) => FrameworkErrorKind::MissingPathVariable,
            PathRejection::FailedToDeserializePathParams(_) => FrameworkErrorKind::TypeMismatch,
            _ => FrameworkErrorKind::RequestBinding,
        };
        InboundError::framework(kind, rejection.body_text())
    }
}

/// Field name from a serde "missing field `name`" message
fn missing_field(message: &str) -> Option<&str> {
    const MARKER: &str = "missing field `";

    let start = message.find(MARKER)? + MARKER.len();
    let rest = &message[start..];
    let end = rest.find('`')?;
    Some(&rest[..end])
}
