use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use super::storage_error;
use crate::domain::{
    models::{Activity, ActivityId, ActivityOrder, NewActivity},
    ports::outbound::ActivityStore,
    ProgressError,
};
use crate::repositories::{
    ActivityRepository, ActivityRepositoryImpl, DatabaseActivity, DatabaseActivityProgress,
    NewDatabaseActivity, UpdateDatabaseActivity,
};

/// Adapter that implements ActivityStore using SQLite.
pub struct SqliteActivityStore<R = ActivityRepositoryImpl> {
    repo: Arc<R>,
}

impl<R> SqliteActivityStore<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: ActivityRepository + Send + Sync + 'static> ActivityStore for SqliteActivityStore<R> {
    async fn insert(&self, activity: &NewActivity) -> Result<Activity, ProgressError> {
        let new_activity = NewDatabaseActivity {
            name: activity.name.clone(),
            date: activity.date.clone(),
            description: activity.description.clone(),
            goal_points: activity.goal_points,
            created_at: OffsetDateTime::now_utc(),
        };

        let created = self
            .repo
            .create_activity(&new_activity)
            .await
            .map_err(storage_error)?;

        Ok(db_activity_to_domain(created))
    }

    async fn update(
        &self,
        id: ActivityId,
        activity: &NewActivity,
    ) -> Result<Option<Activity>, ProgressError> {
        let update = UpdateDatabaseActivity {
            name: activity.name.clone(),
            date: activity.date.clone(),
            description: activity.description.clone(),
            goal_points: activity.goal_points,
        };

        let updated = self
            .repo
            .update_activity(id.as_i64(), &update)
            .await
            .map_err(storage_error)?;

        Ok(updated.map(db_activity_to_domain))
    }

    async fn set_goal_points(
        &self,
        id: ActivityId,
        goal_points: i64,
    ) -> Result<bool, ProgressError> {
        self.repo
            .update_goal_points(id.as_i64(), goal_points)
            .await
            .map_err(storage_error)
    }

    async fn delete(&self, id: ActivityId) -> Result<(), ProgressError> {
        self.repo
            .delete_activity(id.as_i64())
            .await
            .map_err(storage_error)
    }

    async fn get(&self, id: ActivityId) -> Result<Option<Activity>, ProgressError> {
        let activity = self
            .repo
            .get_activity(id.as_i64())
            .await
            .map_err(storage_error)?;

        Ok(activity.map(db_activity_to_domain))
    }

    async fn get_with_completed(
        &self,
        id: ActivityId,
    ) -> Result<Option<(Activity, i64)>, ProgressError> {
        let progress = self
            .repo
            .get_activity_progress(id.as_i64())
            .await
            .map_err(storage_error)?;

        Ok(progress.map(db_progress_to_domain))
    }

    async fn list_with_completed(
        &self,
        order: ActivityOrder,
    ) -> Result<Vec<(Activity, i64)>, ProgressError> {
        let rows = self
            .repo
            .list_activity_progress(order == ActivityOrder::ByName)
            .await
            .map_err(storage_error)?;

        Ok(rows.into_iter().map(db_progress_to_domain).collect())
    }

    async fn delete_with_productions(
        &self,
        id: ActivityId,
    ) -> Result<Option<String>, ProgressError> {
        self.repo
            .delete_activity_cascade(id.as_i64())
            .await
            .map_err(storage_error)
    }
}

/// Convert a database activity to a domain Activity.
fn db_activity_to_domain(activity: DatabaseActivity) -> Activity {
    Activity {
        id: ActivityId::new(activity.id),
        name: activity.name,
        date: activity.date,
        description: activity.description,
        goal_points: activity.goal_points,
        created_at: activity.created_at,
    }
}

fn db_progress_to_domain(row: DatabaseActivityProgress) -> (Activity, i64) {
    (db_activity_to_domain(row.activity), row.completed)
}
