use crate::exception::{FrameworkErrorKind, InboundError};
use crate::pipe::{Pipe, PipeResult};
use async_trait::async_trait;

/// A pipe that parses a string into an integer
#[derive(Default)]
pub struct ParseIntPipe;

#[async_trait]
impl Pipe for ParseIntPipe {
    type Input = String;
    type Output = i64;

    async fn transform(&self, input: String) -> PipeResult<i64> {
        input.trim().parse::<i64>().map_err(|e| {
            InboundError::framework(
                FrameworkErrorKind::TypeMismatch,
                format!(
                    "Failed to convert value of type 'String' to required type 'i64'; For input string: \"{}\": {}",
                    input, e
                ),
            )
        })
    }
}

/// A pipe that rejects blank strings
///
/// There is no bound object here, so the failure carries no field details.
#[derive(Default)]
pub struct NotBlankPipe;

#[async_trait]
impl Pipe for NotBlankPipe {
    type Input = String;
    type Output = String;

    async fn transform(&self, input: String) -> PipeResult<String> {
        if input.trim().is_empty() {
            return Err(InboundError::framework(
                FrameworkErrorKind::ArgumentNotValid,
                "Argument must not be blank",
            ));
        }
        Ok(input)
    }
}
