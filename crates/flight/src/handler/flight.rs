use crate::{
    abstract_trait::flight::service::{DynFlightCommandService, DynFlightQueryService},
    domain::{
        requests::flight::{CreateFlightRequest, UpdateFlightRequest},
        response::flight::FlightResponse,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

// a non-numeric id never names a row, so it reads as missing
fn parse_id(raw: &str) -> Result<i64, HttpError> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::NotFound("Flight not found".to_string()))
}

#[utoipa::path(
    get,
    path = "/Flights",
    tag = "Flight",
    responses(
        (status = 200, description = "List of flights", body = Vec<FlightResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_flights(
    Extension(service): Extension<DynFlightQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let flights = service.find_all().await?;
    Ok((StatusCode::OK, Json(flights)))
}

#[utoipa::path(
    get,
    path = "/Flights/{id}",
    tag = "Flight",
    params(("id" = String, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight details", body = FlightResponse),
        (status = 404, description = "Flight not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_flight(
    Extension(service): Extension<DynFlightQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;
    let flight = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(flight)))
}

#[utoipa::path(
    post,
    path = "/Flights",
    tag = "Flight",
    request_body = CreateFlightRequest,
    responses(
        (status = 201, description = "Flight created", body = FlightResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_flight(
    Extension(service): Extension<DynFlightCommandService>,
    Json(body): Json<CreateFlightRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let flight = service.create_flight(&body).await?;
    Ok((StatusCode::CREATED, Json(flight)))
}

#[utoipa::path(
    put,
    path = "/Flights/{id}",
    tag = "Flight",
    params(("id" = String, Path, description = "Flight ID")),
    request_body = UpdateFlightRequest,
    responses(
        (status = 200, description = "Flight updated", body = FlightResponse),
        (status = 404, description = "Flight not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_flight(
    Extension(service): Extension<DynFlightCommandService>,
    Path(id): Path<String>,
    Json(mut body): Json<UpdateFlightRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;
    body.id = Some(id);
    let flight = service.update_flight(&body).await?;
    Ok((StatusCode::OK, Json(flight)))
}

#[utoipa::path(
    delete,
    path = "/Flights/{id}",
    tag = "Flight",
    params(("id" = String, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight deleted", body = serde_json::Value),
        (status = 404, description = "Flight not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_flight(
    Extension(service): Extension<DynFlightCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;
    service.delete_flight(id).await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}

pub fn flight_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/Flights", get(get_flights))
        .route("/Flights/{id}", get(get_flight))
        .route("/Flights", post(create_flight))
        .route("/Flights/{id}", put(update_flight))
        .route("/Flights/{id}", delete(delete_flight))
        .layer(Extension(app_state.di_container.flight_query.clone()))
        .layer(Extension(app_state.di_container.flight_command.clone()))
}
