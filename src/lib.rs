//! # gamification-errors
//!
//! Turns every failure raised while handling a request in an axum REST
//! service into one JSON error envelope with a matching HTTP status.
//!
//! ```json
//! {
//!   "status": 400,
//!   "internalCode": "GMF-F2-D2",
//!   "clientMessage": "Request validation failed",
//!   "developerMessage": "...",
//!   "fieldErrors": ["email : must not be blank"]
//! }
//! ```
//!
//! ## Features
//!
//! - **Fixed categories**: domain, validation, missing parameter, framework and an
//!   `UNHANDLED` fallback, each with a static code and client message
//! - **Pure translation**: [`ErrorTranslator`] maps an [`InboundError`] to an
//!   [`ErrorResponse`] and never fails
//! - **Router integration**: unmapped routes, unsupported methods, timeouts and
//!   errors escaping the routes are answered with the same envelope
//! - **Validating extractors**: `Valid<T>` and `RequiredQuery<T>` reject with
//!   translatable errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gamification_errors::prelude::*;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct AwardRequest {
//!     to: String,
//!     points: i64,
//! }
//!
//! impl Validate for AwardRequest {
//!     fn validate(&self, errors: &mut BindingResult) {
//!         if self.points <= 0 {
//!             errors.reject_value("points", "must be greater than 0");
//!         }
//!     }
//! }
//!
//! async fn award(Valid(request): Valid<AwardRequest>) -> Result<String, InboundError> {
//!     if request.to.is_empty() {
//!         return Err(DomainError::new("Unknown recipient").into());
//!     }
//!     Ok(format!("{} points to {}", request.points, request.to))
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ExceptionConfig::load(&ConfigService::new()).unwrap();
//!
//!     let app = Router::new()
//!         .route("/awards", axum::routing::post(award))
//!         .with_exception_handling(&config);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod exception;
pub mod pipe;

// Re-export core types
pub use common::ErrorResponse;
pub use config::{ConfigService, ExceptionConfig};
pub use error::{ConfigError, DomainError};
pub use exception::{
    ErrorCategory, ErrorTranslator, ExceptionHandlingExt, InboundError, MessageStyle,
};

// Re-export commonly used types from dependencies
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use gamification_errors::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::ErrorResponse;
    pub use crate::config::{ConfigService, ExceptionConfig};
    pub use crate::error::{ConfigError, DomainError};
    pub use crate::exception::{
        BindingResult, ErrorCategory, ErrorTranslator, ExceptionFilter, ExceptionHandlingExt,
        ExceptionLayer, FrameworkError, FrameworkErrorKind, InboundError, MessageStyle,
        RestExceptionFilter,
    };
    pub use crate::pipe::builtins::*;
    pub use crate::pipe::{Pipe, PipeResult, RequiredQuery, Valid, Validate, ValidationPipe};
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        extract::{Path, Query, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
