use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{ApiError, JsonBody};
use crate::{
    adapters::inbound::http::{ProductionListingResponse, ProductionPayload, ProductionResponse},
    app_state::AppState,
    domain::models::{ProductionId, ProductionInput},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_productions).post(create_production))
        .route(
            "/:id",
            get(get_production)
                .put(update_production)
                .delete(delete_production),
        )
}

#[instrument(name = "GET /api/productions", skip(app_state))]
async fn list_productions(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ProductionListingResponse>>, ApiError> {
    let productions = app_state.production_service.list_productions().await?;

    Ok(Json(productions.into_iter().map(Into::into).collect()))
}

#[instrument(name = "POST /api/productions", skip(app_state))]
async fn create_production(
    State(app_state): State<AppState>,
    JsonBody(body): JsonBody<ProductionPayload>,
) -> Result<(StatusCode, Json<ProductionResponse>), ApiError> {
    let input = ProductionInput::from(body);
    let production = app_state
        .production_service
        .create_production(&input)
        .await?;

    Ok((StatusCode::CREATED, Json(production.into())))
}

#[instrument(name = "GET /api/productions/:id", skip(app_state))]
async fn get_production(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductionResponse>, ApiError> {
    let production = app_state
        .production_service
        .get_production(ProductionId::new(id))
        .await?;

    Ok(Json(production.into()))
}

#[instrument(name = "PUT /api/productions/:id", skip(app_state))]
async fn update_production(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(body): JsonBody<ProductionPayload>,
) -> Result<Json<ProductionResponse>, ApiError> {
    let input = ProductionInput::from(body);
    let production = app_state
        .production_service
        .update_production(ProductionId::new(id), &input)
        .await?;

    Ok(Json(production.into()))
}

#[instrument(name = "DELETE /api/productions/:id", skip(app_state))]
async fn delete_production(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    app_state
        .production_service
        .delete_production(ProductionId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
