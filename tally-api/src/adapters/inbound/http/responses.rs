//! HTTP response types for activity and production endpoints.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::models::{ActivityProgress, Production, ProductionListing};

/// Activity with its progress.
///
/// A missing goal is reported as `goal_points: 0`; `percent` is `null`
/// whenever no positive goal is set.
#[derive(Debug, Serialize)]
pub struct ActivityProgressResponse {
    pub id: i64,
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub goal_points: i64,
    pub completed: i64,
    pub percent: Option<i64>,
}

impl From<ActivityProgress> for ActivityProgressResponse {
    fn from(progress: ActivityProgress) -> Self {
        let activity = progress.activity;
        Self {
            id: activity.id.as_i64(),
            name: activity.name,
            date: activity.date,
            description: activity.description,
            created_at: activity.created_at,
            goal_points: activity.goal_points.unwrap_or(0),
            completed: progress.completed,
            percent: progress.percent,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductionResponse {
    pub id: i64,
    pub title: String,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub activity_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Production> for ProductionResponse {
    fn from(production: Production) -> Self {
        Self {
            id: production.id.as_i64(),
            title: production.title,
            quantity: production.quantity,
            description: production.description,
            activity_id: production.activity_id.as_i64(),
            created_at: production.created_at,
        }
    }
}

/// Production with the name of its activity; `null` once the activity is gone.
#[derive(Debug, Serialize)]
pub struct ProductionListingResponse {
    #[serde(flatten)]
    pub production: ProductionResponse,
    pub activity_name: Option<String>,
}

impl From<ProductionListing> for ProductionListingResponse {
    fn from(listing: ProductionListing) -> Self {
        Self {
            production: listing.production.into(),
            activity_name: listing.activity_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MarkCompleteResponse {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GoalPointsResponse {
    pub success: bool,
    pub goal_points: i64,
}
