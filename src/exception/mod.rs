use axum::{BoxError, response::Response};

pub mod category;
pub mod http;
pub mod inbound;
pub mod layer;
pub mod rejection;
pub mod router;
pub mod translator;

pub use category::{CategoryInfo, ErrorCategory};
pub use http::{RenderedError, RestExceptionFilter, classify, rerender};
pub use inbound::{
    BindingResult, FieldViolation, FrameworkError, FrameworkErrorKind, InboundError,
    ObjectViolation,
};
pub use layer::{ExceptionLayer, ExceptionMiddleware};
pub use router::ExceptionHandlingExt;
pub use translator::{ErrorTranslator, MessageStyle};

/// The ExceptionFilter trait
///
/// Filters handle errors thrown during request processing.
/// They must return a valid Response.
pub trait ExceptionFilter: Send + Sync + 'static {
    /// Catch an exception and return a response
    fn catch(&self, error: BoxError) -> Response;
}
