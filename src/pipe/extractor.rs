use crate::exception::InboundError;
use crate::pipe::{Pipe, Validate, ValidationPipe};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Axum extractor for a validated JSON body
///
/// Deserializes the body like [`Json`] and then runs [`ValidationPipe`].
/// Both failures reject with an [`InboundError`].
///
/// # Example
/// ```
/// use gamification_errors::pipe::{BindingResult, Valid, Validate};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct NewBadge {
///     name: String,
/// }
///
/// impl Validate for NewBadge {
///     fn validate(&self, errors: &mut BindingResult) {
///         if self.name.is_empty() {
///             errors.reject_value("name", "must not be blank");
///         }
///     }
/// }
///
/// async fn create_badge(Valid(badge): Valid<NewBadge>) -> String {
///     badge.name
/// }
/// ```
pub struct Valid<T>(pub T);

impl<T, S> FromRequest<S> for Valid<T>
where
    T: DeserializeOwned + Validate + Send + 'static,
    S: Send + Sync,
{
    type Rejection = InboundError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state).await?;
        ValidationPipe::<T>::new().transform(value).await.map(Valid)
    }
}

/// Axum extractor for query parameters that must be present
///
/// A missing field rejects as a missing parameter, anything else that fails
/// to deserialize as a type mismatch.
pub struct RequiredQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for RequiredQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = InboundError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(RequiredQuery(value))
    }
}

impl<T> std::ops::Deref for Valid<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::Deref for RequiredQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe::BindingResult;
    use axum::{body::Body, http};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct NewBadge {
        name: String,
    }

    impl Validate for NewBadge {
        fn validate(&self, errors: &mut BindingResult) {
            if self.name.is_empty() {
                errors.reject_value("name", "must not be blank");
            }
        }
    }

    fn request(body: &str) -> Request {
        http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let Valid(badge) = Valid::<NewBadge>::from_request(request(r#"{"name":"Helper"}"#), &())
            .await
            .unwrap();
        assert_eq!(badge.name, "Helper");
    }

    #[tokio::test]
    async fn test_invalid_body_is_validation_error() {
        let err = Valid::<NewBadge>::from_request(request(r#"{"name":""}"#), &())
            .await
            .err()
            .unwrap();
        match err {
            InboundError::Validation(result) => {
                assert_eq!(result.object_name(), "newBadge");
                assert_eq!(result.field_errors()[0].field, "name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_required_query_missing() {
        #[derive(Deserialize)]
        struct Lookup {
            #[serde(rename = "userId")]
            _user_id: String,
        }

        let (mut parts, _) = http::Request::builder()
            .uri("/points?page=1")
            .body(())
            .unwrap()
            .into_parts();
        let err = RequiredQuery::<Lookup>::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, InboundError::MissingParameter { ref name, .. } if name == "userId"));
    }
}
