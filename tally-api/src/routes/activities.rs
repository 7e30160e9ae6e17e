use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tracing::instrument;

use super::{ApiError, JsonBody};
use crate::{
    adapters::inbound::http::{
        goal_points_from_json, ActivityPayload, ActivityProgressResponse, GoalPointsResponse,
        MarkCompleteResponse, ProductionResponse,
    },
    app_state::AppState,
    domain::models::{ActivityId, ActivityInput, ActivityOrder},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_activities).post(create_activity))
        .route("/summary", get(activity_summary))
        .route(
            "/:id",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
        .route("/:id/productions", get(list_activity_productions))
        .route("/:id/mark-complete", post(mark_complete))
        .route("/:id/reset-progress", post(reset_progress))
        .route("/:id/goal-points", post(set_goal_points))
}

#[instrument(name = "GET /api/activities", skip(app_state))]
async fn list_activities(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ActivityProgressResponse>>, ApiError> {
    let activities = app_state
        .activity_service
        .list_with_progress(ActivityOrder::Newest)
        .await?;

    Ok(Json(activities.into_iter().map(Into::into).collect()))
}

#[instrument(name = "GET /api/activities/summary", skip(app_state))]
async fn activity_summary(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ActivityProgressResponse>>, ApiError> {
    let activities = app_state
        .activity_service
        .list_with_progress(ActivityOrder::ByName)
        .await?;

    Ok(Json(activities.into_iter().map(Into::into).collect()))
}

#[instrument(name = "POST /api/activities", skip(app_state))]
async fn create_activity(
    State(app_state): State<AppState>,
    JsonBody(body): JsonBody<ActivityPayload>,
) -> Result<(StatusCode, Json<ActivityProgressResponse>), ApiError> {
    let input = ActivityInput::from(body);
    let activity = app_state.activity_service.create_activity(&input).await?;
    let progress = app_state
        .activity_service
        .get_with_progress(activity.id)
        .await?;

    Ok((StatusCode::CREATED, Json(progress.into())))
}

#[instrument(name = "GET /api/activities/:id", skip(app_state))]
async fn get_activity(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActivityProgressResponse>, ApiError> {
    let progress = app_state
        .activity_service
        .get_with_progress(ActivityId::new(id))
        .await?;

    Ok(Json(progress.into()))
}

#[instrument(name = "PUT /api/activities/:id", skip(app_state))]
async fn update_activity(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(body): JsonBody<ActivityPayload>,
) -> Result<Json<ActivityProgressResponse>, ApiError> {
    let id = ActivityId::new(id);
    let input = ActivityInput::from(body);
    app_state
        .activity_service
        .update_activity(id, &input)
        .await?;
    let progress = app_state.activity_service.get_with_progress(id).await?;

    Ok(Json(progress.into()))
}

#[instrument(name = "DELETE /api/activities/:id", skip(app_state))]
async fn delete_activity(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    app_state
        .activity_service
        .delete_activity(ActivityId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "GET /api/activities/:id/productions", skip(app_state))]
async fn list_activity_productions(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ProductionResponse>>, ApiError> {
    let id = ActivityId::new(id);
    // 404 for unknown activities rather than an empty list
    app_state.activity_service.get_with_progress(id).await?;
    let productions = app_state.production_service.list_for_activity(id).await?;

    Ok(Json(productions.into_iter().map(Into::into).collect()))
}

#[instrument(name = "POST /api/activities/:id/mark-complete", skip(app_state))]
async fn mark_complete(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MarkCompleteResponse>, ApiError> {
    let name = app_state
        .activity_service
        .mark_complete(ActivityId::new(id))
        .await?;

    Ok(Json(MarkCompleteResponse { name }))
}

#[instrument(name = "POST /api/activities/:id/reset-progress", skip(app_state))]
async fn reset_progress(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ActivityProgressResponse>, ApiError> {
    let id = ActivityId::new(id);
    app_state.activity_service.reset_progress(id).await?;
    let progress = app_state.activity_service.get_with_progress(id).await?;

    Ok(Json(progress.into()))
}

#[instrument(name = "POST /api/activities/:id/goal-points", skip(app_state, body))]
async fn set_goal_points(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<GoalPointsResponse>, ApiError> {
    let id = ActivityId::new(id);
    app_state.activity_service.get_with_progress(id).await?;

    let value = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|body| body.get("goal_points").cloned())
        .ok_or_else(|| ApiError::bad_request("Missing goal_points in JSON body"))?;

    let goal_points = goal_points_from_json(&value)
        .ok_or_else(|| ApiError::bad_request("goal_points must be an integer"))?;

    let goal_points = app_state
        .activity_service
        .set_goal_points(id, goal_points)
        .await?;

    Ok(Json(GoalPointsResponse {
        success: true,
        goal_points,
    }))
}
