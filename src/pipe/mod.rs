use crate::exception::InboundError;
use async_trait::async_trait;

pub mod builtins;
pub mod extractor;
pub mod validation;

pub use crate::exception::BindingResult;
pub use extractor::{RequiredQuery, Valid};
pub use validation::{Validate, ValidationPipe};

/// Pipes fail with the same error type handlers return, so a rejected
/// input translates like any other request failure.
pub type PipeResult<T> = Result<T, InboundError>;

/// The Pipe trait for transformation and validation
#[async_trait]
pub trait Pipe: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn transform(&self, input: Self::Input) -> PipeResult<Self::Output>;
}
