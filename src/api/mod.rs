pub mod dto;
pub mod errors;
pub mod handlers;
pub mod payload;

use axum::{routing::get, Router};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::readings::ReadingService;
use handlers::ApiDoc;

pub fn router(pool: PgPool) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .route(
            "/leituras/",
            get(handlers::list_readings).post(handlers::create_reading),
        )
        .route(
            "/leituras",
            get(handlers::list_readings).post(handlers::create_reading),
        )
        .with_state(ReadingService::new(pool))
        .split_for_parts();

    router
        .route("/health", get(handlers::health))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { axum::Json(api) }),
        )
}
