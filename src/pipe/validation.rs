use crate::exception::BindingResult;
use crate::pipe::{Pipe, PipeResult};
use async_trait::async_trait;
use std::marker::PhantomData;

/// Declarative validation for a bound request object
///
/// Implementations report every failure into `errors` instead of stopping
/// at the first one.
///
/// # Example
/// ```
/// use gamification_errors::pipe::{BindingResult, Validate};
///
/// struct NewUser {
///     email: String,
/// }
///
/// impl Validate for NewUser {
///     fn validate(&self, errors: &mut BindingResult) {
///         if self.email.is_empty() {
///             errors.reject_value("email", "must not be blank");
///         }
///     }
/// }
/// ```
pub trait Validate {
    fn validate(&self, errors: &mut BindingResult);
}

/// Runs [`Validate`] and rejects the input when anything was reported
pub struct ValidationPipe<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> ValidationPipe<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ValidationPipe<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Pipe for ValidationPipe<T>
where
    T: Validate + Send + 'static,
{
    type Input = T;
    type Output = T;

    async fn transform(&self, input: T) -> PipeResult<T> {
        let mut errors = BindingResult::new(object_name::<T>());
        input.validate(&mut errors);
        errors.into_result()?;
        Ok(input)
    }
}

/// `my_crate::dto::AwardRequest<X>` -> `awardRequest`
fn object_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    let short = without_generics.rsplit("::").next().unwrap_or(without_generics);

    let mut chars = short.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::InboundError;

    struct UserDto {
        email: String,
        password: String,
        confirm: String,
    }

    impl Validate for UserDto {
        fn validate(&self, errors: &mut BindingResult) {
            if self.email.is_empty() {
                errors.reject_value("email", "must not be blank");
            }
            if self.password != self.confirm {
                errors.reject("passwords do not match");
            }
        }
    }

    #[test]
    fn test_object_name() {
        assert_eq!(object_name::<UserDto>(), "userDto");
        assert_eq!(object_name::<Vec<UserDto>>(), "vec");
    }

    #[tokio::test]
    async fn test_valid_input_passes() {
        let user = UserDto {
            email: "a@b.c".to_string(),
            password: "x".to_string(),
            confirm: "x".to_string(),
        };
        let user = ValidationPipe::<UserDto>::new().transform(user).await.unwrap();
        assert_eq!(user.email, "a@b.c");
    }

    #[tokio::test]
    async fn test_invalid_input_collects_everything() {
        let user = UserDto {
            email: String::new(),
            password: "x".to_string(),
            confirm: "y".to_string(),
        };
        let err = ValidationPipe::<UserDto>::new().transform(user).await.err().unwrap();
        match err {
            InboundError::Validation(result) => {
                assert_eq!(result.object_name(), "userDto");
                assert_eq!(result.field_errors().len(), 1);
                assert_eq!(result.global_errors().len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
