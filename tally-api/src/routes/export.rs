use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::{activities_csv, productions_csv},
    app_state::AppState,
    domain::models::ActivityOrder,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activities.csv", get(export_activities))
        .route("/productions.csv", get(export_productions))
}

#[instrument(name = "GET /export/activities.csv", skip(app_state))]
async fn export_activities(State(app_state): State<AppState>) -> Result<Response, ApiError> {
    let activities = app_state
        .activity_service
        .list_with_progress(ActivityOrder::Newest)
        .await?;

    Ok(csv_attachment("activities.csv", activities_csv(&activities)?))
}

#[instrument(name = "GET /export/productions.csv", skip(app_state))]
async fn export_productions(State(app_state): State<AppState>) -> Result<Response, ApiError> {
    let productions = app_state.production_service.list_productions().await?;

    Ok(csv_attachment("productions.csv", productions_csv(&productions)?))
}

fn csv_attachment(filename: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
