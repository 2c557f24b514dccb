use super::{
    ErrorTranslator, ExceptionLayer, FrameworkErrorKind, InboundError, RestExceptionFilter,
    rerender,
};
use crate::config::ExceptionConfig;
use axum::{
    Router,
    extract::State,
    http::{Method, Uri},
    middleware,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::catch_panic::CatchPanicLayer;

/// Installs error translation on an axum [`Router`]
///
/// # Example
/// ```
/// use axum::{Router, routing::get};
/// use gamification_errors::config::ExceptionConfig;
/// use gamification_errors::exception::ExceptionHandlingExt;
///
/// let app: Router = Router::new()
///     .route("/points", get(|| async { "42" }))
///     .with_exception_handling(&ExceptionConfig::default());
/// ```
pub trait ExceptionHandlingExt {
    /// Answer unmapped routes, unsupported methods, timeouts, panics and
    /// errors escaping the routes with the JSON error envelope. Errors that
    /// handlers and extractors return are rendered with the same style.
    fn with_exception_handling(self, config: &ExceptionConfig) -> Self;
}

impl<S> ExceptionHandlingExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_exception_handling(self, config: &ExceptionConfig) -> Self {
        let translator = config.translator();

        self.fallback(move |method: Method, uri: Uri| async move {
            no_handler_found(translator, method, uri)
        })
        .method_not_allowed_fallback(move |method: Method| async move {
            method_not_supported(translator, method)
        })
        .layer(
            ServiceBuilder::new()
                .layer(ExceptionLayer::new(RestExceptionFilter::new(translator)))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
        .layer(middleware::map_response_with_state(translator, rerender_with))
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            handler_panicked(translator, panic)
        }))
    }
}

async fn rerender_with(State(translator): State<ErrorTranslator>, response: Response) -> Response {
    rerender(translator, response)
}

fn handler_panicked(translator: ErrorTranslator, panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    translator
        .translate_unhandled_error(&anyhow::anyhow!("Request handler panicked: {}", detail))
        .into_response()
}

fn no_handler_found(
    translator: ErrorTranslator,
    method: Method,
    uri: Uri,
) -> crate::common::ErrorResponse {
    translator.translate(&InboundError::framework(
        FrameworkErrorKind::NoHandlerFound,
        format!("No endpoint {} {}.", method, uri.path()),
    ))
}

fn method_not_supported(translator: ErrorTranslator, method: Method) -> crate::common::ErrorResponse {
    translator.translate(&InboundError::framework(
        FrameworkErrorKind::MethodNotSupported,
        format!("Request method '{}' is not supported", method),
    ))
}
