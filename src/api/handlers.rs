use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use utoipa::OpenApi;

use super::{
    dto::{CreateSensorReadingRequest, SensorReadingDto},
    errors::ApiError,
    payload,
};
use crate::readings::ReadingService;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// List every reading, most recent first (date descending, then time descending).
#[utoipa::path(
    get,
    path = "/leituras/",
    responses(
        (status = 200, description = "All sensor readings, newest first", body = Vec<SensorReadingDto>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "readings"
)]
pub async fn list_readings(
    State(service): State<ReadingService>,
) -> Result<Json<Vec<SensorReadingDto>>, ApiError> {
    let rows = service.list().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Record a new reading. `id`, `data` and `hora` are assigned by the server.
#[utoipa::path(
    post,
    path = "/leituras/",
    request_body = CreateSensorReadingRequest,
    responses(
        (status = 201, description = "Reading created", body = SensorReadingDto),
        (status = 400, description = "Malformed body or invalid fields, keyed by field name"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "readings"
)]
pub async fn create_reading(
    State(service): State<ReadingService>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SensorReadingDto>), ApiError> {
    let Json(body) = body?;
    let request = payload::parse_create_request(&body)?;

    let created = service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Returns `200 OK` with `{"status":"ok"}` when the server is running.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(list_readings, create_reading, health),
    components(schemas(SensorReadingDto, CreateSensorReadingRequest)),
    tags(
        (name = "readings", description = "Sensor reading ingestion and retrieval"),
        (name = "system",   description = "System endpoints"),
    ),
    info(
        title = "Sensor Readings API",
        version = "0.1.0",
        description = "Records and lists soil and climate sensor readings"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
