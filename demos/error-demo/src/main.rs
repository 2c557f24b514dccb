use axum::routing::{get, post};
use gamification_errors::prelude::*;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
struct AwardRequest {
    from: String,
    to: String,
    points: i64,
}

impl Validate for AwardRequest {
    fn validate(&self, errors: &mut BindingResult) {
        if self.from.trim().is_empty() {
            errors.reject_value("from", "must not be blank");
        }
        if self.to.trim().is_empty() {
            errors.reject_value("to", "must not be blank");
        }
        if self.points <= 0 {
            errors.reject_value("points", "must be greater than 0");
        }
        if self.from == self.to {
            errors.reject("a user cannot award themselves");
        }
    }
}

#[derive(Deserialize)]
struct PointsQuery {
    #[serde(rename = "userId")]
    user_id: String,
}

async fn award(Valid(request): Valid<AwardRequest>) -> Result<String, InboundError> {
    if request.to == "ghost" {
        return Err(DomainError::new(format!("User '{}' does not exist", request.to)).into());
    }
    Ok(format!(
        "{} awarded {} points to {}",
        request.from, request.points, request.to
    ))
}

async fn points(RequiredQuery(query): RequiredQuery<PointsQuery>) -> Result<String, InboundError> {
    let user_id = NotBlankPipe.transform(query.user_id).await?;
    Ok(format!("{} has 0 points", user_id))
}

async fn user(Path(id): Path<String>) -> Result<String, InboundError> {
    let id = ParseIntPipe.transform(id).await?;
    Ok(format!("user #{}", id))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match ExceptionConfig::load(&ConfigService::new()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let router = Router::new()
        .route("/awards", post(award))
        .route("/points", get(points))
        .route("/users/{id}", get(user))
        .with_exception_handling(&config)
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Server running on http://127.0.0.1:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, router).await.unwrap();
}
