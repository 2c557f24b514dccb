use super::{ErrorTranslator, ExceptionFilter, FrameworkErrorKind, InboundError};
use crate::error::DomainError;
use axum::{
    BoxError,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use std::error::Error;
use std::sync::Arc;
use tower::timeout::error::Elapsed;

/// Filter that answers every error with the JSON error envelope
#[derive(Debug, Clone, Copy, Default)]
pub struct RestExceptionFilter {
    translator: ErrorTranslator,
}

impl RestExceptionFilter {
    pub fn new(translator: ErrorTranslator) -> Self {
        Self { translator }
    }
}

impl ExceptionFilter for RestExceptionFilter {
    fn catch(&self, error: BoxError) -> Response {
        self.translator.translate(&classify(error)).into_response()
    }
}

/// Classify a type-erased error
///
/// Known types are tried most specific first; the first match wins and
/// anything unrecognised becomes [`InboundError::Unhandled`].
pub fn classify(error: BoxError) -> InboundError {
    let error = match take::<InboundError>(error) {
        Ok(e) => return e,
        Err(e) => e,
    };
    let error = match take::<DomainError>(error) {
        Ok(e) => return e.into(),
        Err(e) => e,
    };
    let error = match take::<JsonRejection>(error) {
        Ok(e) => return e.into(),
        Err(e) => e,
    };
    let error = match take::<QueryRejection>(error) {
        Ok(e) => return e.into(),
        Err(e) => e,
    };
    let error = match take::<PathRejection>(error) {
        Ok(e) => return e.into(),
        Err(e) => e,
    };

    if error.is::<Elapsed>() {
        return InboundError::framework(
            FrameworkErrorKind::AsyncRequestTimeout,
            "Async request timed out",
        );
    }

    InboundError::Unhandled(anyhow::anyhow!(error))
}

/// The error a response was rendered from
///
/// Kept in the response extensions so a router configured with another
/// [`MessageStyle`](super::MessageStyle) can render it again.
#[derive(Debug, Clone)]
pub struct RenderedError(pub Arc<InboundError>);

/// Renders with the legacy style; `with_exception_handling` re-renders
/// with the router's configured translator.
impl IntoResponse for InboundError {
    fn into_response(self) -> Response {
        let mut response = ErrorTranslator::default().translate(&self).into_response();
        response
            .extensions_mut()
            .insert(RenderedError(Arc::new(self)));
        response
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        InboundError::from(self).into_response()
    }
}

/// Render a response again if it came from an [`InboundError`]
pub fn rerender(translator: ErrorTranslator, mut response: Response) -> Response {
    match response.extensions_mut().remove::<RenderedError>() {
        Some(RenderedError(error)) => translator.translate(&error).into_response(),
        None => response,
    }
}

fn take<T: Error + 'static>(error: BoxError) -> Result<T, BoxError> {
    error.downcast::<T>().map(|e| *e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::{BindingResult, ErrorCategory, MessageStyle};
    use axum::http::StatusCode;

    #[test]
    fn test_inbound_error_passes_through() {
        let mut result = BindingResult::new("userDto");
        result.reject_value("email", "must not be blank");
        let error: BoxError = Box::new(InboundError::from(result));

        assert!(matches!(classify(error), InboundError::Validation(_)));
    }

    #[test]
    fn test_domain_error_is_recognised() {
        let error: BoxError = Box::new(DomainError::new("No such user"));
        match classify(error) {
            InboundError::Domain(e) => assert_eq!(e.message(), "No such user"),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_elapsed_is_async_timeout() {
        let error: BoxError = Box::new(Elapsed::new());
        match classify(error) {
            InboundError::Framework(e) => {
                assert_eq!(e.kind, FrameworkErrorKind::AsyncRequestTimeout)
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_error_is_unhandled() {
        let error: BoxError = Box::new(std::io::Error::other("socket closed"));
        let inbound = classify(error);
        assert!(matches!(inbound, InboundError::Unhandled(_)));
        assert!(inbound.to_string().contains("socket closed"));
    }

    #[test]
    fn test_domain_error_into_response() {
        let response = DomainError::new("Badge already granted").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_rendered_error_is_kept_for_rerendering() {
        let response = InboundError::missing_parameter("userId").into_response();
        assert!(response.extensions().get::<RenderedError>().is_some());

        let response = rerender(ErrorTranslator::new(MessageStyle::Normalized), response);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.extensions().get::<RenderedError>().is_none());
    }

    #[test]
    fn test_rerender_leaves_other_responses_alone() {
        let response = rerender(ErrorTranslator::default(), StatusCode::NO_CONTENT.into_response());
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_filter_never_leaves_request_unanswered() {
        let filter = RestExceptionFilter::default();
        let response = filter.catch("something odd".into());

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.status(), ErrorCategory::Unhandled.status());
    }
}
