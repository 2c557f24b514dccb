use super::{ExceptionFilter, RestExceptionFilter};
use axum::{BoxError, body::Body, http::Request, response::Response};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service, ServiceExt};

/// Tower Layer that turns errors escaping the inner service into responses
///
/// The wrapped service's error type is erased to [`BoxError`] and handed to
/// the [`ExceptionFilter`]; the resulting service never fails.
#[derive(Clone)]
pub struct ExceptionLayer {
    filter: Arc<dyn ExceptionFilter>,
}

impl ExceptionLayer {
    pub fn new(filter: impl ExceptionFilter) -> Self {
        Self {
            filter: Arc::new(filter),
        }
    }
}

impl Default for ExceptionLayer {
    fn default() -> Self {
        Self::new(RestExceptionFilter::default())
    }
}

impl<S> Layer<S> for ExceptionLayer {
    type Service = ExceptionMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ExceptionMiddleware {
            inner,
            filter: self.filter.clone(),
        }
    }
}

#[derive(Clone)]
pub struct ExceptionMiddleware<S> {
    inner: S,
    filter: Arc<dyn ExceptionFilter>,
}

impl<S> Service<Request<Body>> for ExceptionMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Into<BoxError>,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Readiness failures of the inner service are caught in `call`
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let filter = self.filter.clone();
        let inner = self.inner.clone();

        Box::pin(async move {
            match inner.oneshot(request).await {
                Ok(response) => Ok(response),
                Err(e) => Ok(filter.catch(e.into())),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use axum::http::StatusCode;
    use tower::service_fn;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_successful_response_passes_through() {
        let service = ExceptionLayer::default().layer(service_fn(|_req: Request<Body>| async {
            Ok::<_, BoxError>(Response::new(Body::from("ok")))
        }));

        let response = service.oneshot(Request::new(Body::empty())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_domain_error_becomes_bad_request() {
        let service = ExceptionLayer::default().layer(service_fn(|_req: Request<Body>| async {
            Err::<Response, BoxError>(Box::new(DomainError::new("Not enough points")))
        }));

        let response = service.oneshot(Request::new(Body::empty())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["internalCode"], "GMF-F1-D1");
        assert_eq!(
            body["developerMessage"],
            "Gamification exception: Not enough points"
        );
    }

    #[tokio::test]
    async fn test_unknown_error_becomes_server_error() {
        let service = ExceptionLayer::default().layer(service_fn(|_req: Request<Body>| async {
            Err::<Response, BoxError>(Box::new(std::io::Error::other("connection reset")))
        }));

        let response = service.oneshot(Request::new(Body::empty())).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["internalCode"], "GMF-F5-D5");
        assert!(
            body["developerMessage"]
                .as_str()
                .unwrap()
                .contains("connection reset")
        );
    }
}
