use crate::error::DomainError;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Every failure the translator knows how to answer
///
/// Upstream layers (extractors, pipes, handlers, middleware) build one of
/// these; [`ErrorTranslator::translate`](super::ErrorTranslator::translate)
/// turns it into exactly one response.
#[derive(Debug, Error)]
pub enum InboundError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{}", .0.summary())]
    Validation(BindingResult),

    #[error("{message}")]
    MissingParameter { name: String, message: String },

    #[error(transparent)]
    Framework(#[from] FrameworkError),

    #[error(transparent)]
    Unhandled(#[from] anyhow::Error),
}

impl InboundError {
    /// Missing request parameter with the default message
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        let name = name.into();
        let message = format!("Required request parameter '{}' is not present", name);
        Self::MissingParameter { name, message }
    }

    pub fn framework(kind: FrameworkErrorKind, message: impl Into<String>) -> Self {
        Self::Framework(FrameworkError::new(kind, message))
    }
}

impl From<BindingResult> for InboundError {
    fn from(result: BindingResult) -> Self {
        Self::Validation(result)
    }
}

/// Web-layer failure types that all share the `FRAMEWORK_EXCEPTION` category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FrameworkErrorKind {
    MethodNotSupported,
    MediaTypeNotSupported,
    MediaTypeNotAcceptable,
    MissingPathVariable,
    RequestBinding,
    ConversionNotSupported,
    TypeMismatch,
    MessageNotReadable,
    MessageNotWritable,
    /// Validation failure that arrived without per-field details
    ArgumentNotValid,
    NoHandlerFound,
    AsyncRequestTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FrameworkError {
    pub kind: FrameworkErrorKind,
    pub message: String,
}

impl FrameworkError {
    pub fn new(kind: FrameworkErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A single invalid field reported by validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// A cross-field rule that failed for the whole object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectViolation {
    pub object_name: String,
    pub message: String,
}

/// Outcome of validating one bound object
///
/// Field and object violations are kept in the order they were reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BindingResult {
    object_name: String,
    field_errors: Vec<FieldViolation>,
    global_errors: Vec<ObjectViolation>,
}

impl BindingResult {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            field_errors: Vec::new(),
            global_errors: Vec::new(),
        }
    }

    /// Record a failure for one field
    pub fn reject_value(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.field_errors.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Record a failure for the object as a whole
    pub fn reject(&mut self, message: impl Into<String>) {
        self.global_errors.push(ObjectViolation {
            object_name: self.object_name.clone(),
            message: message.into(),
        });
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn field_errors(&self) -> &[FieldViolation] {
        &self.field_errors
    }

    pub fn global_errors(&self) -> &[ObjectViolation] {
        &self.global_errors
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.len() + self.global_errors.len()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// `Ok(())` when nothing was rejected, otherwise a validation error
    pub fn into_result(self) -> Result<(), InboundError> {
        if self.has_errors() {
            Err(InboundError::Validation(self))
        } else {
            Ok(())
        }
    }

    pub(crate) fn summary(&self) -> String {
        format!(
            "Validation failed for object='{}'. Error count: {}",
            self.object_name,
            self.error_count()
        )
    }
}
