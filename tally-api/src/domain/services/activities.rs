use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{Activity, ActivityId, ActivityInput, ActivityOrder, ActivityProgress},
    ports::{
        inbound::ActivityService,
        outbound::{ActivityStore, ProductionStore},
    },
    ProgressError,
};

/// Implementation of the ActivityService inbound port.
///
/// Registry operations go to the ActivityStore. Resetting progress goes
/// through the ProductionStore, and mark-complete relies on the
/// ActivityStore's atomic cascade.
pub struct ActivityServiceImpl<A, P> {
    activities: Arc<A>,
    productions: Arc<P>,
}

impl<A, P> ActivityServiceImpl<A, P> {
    pub fn new(activities: Arc<A>, productions: Arc<P>) -> Self {
        Self {
            activities,
            productions,
        }
    }
}

#[async_trait]
impl<A: ActivityStore, P: ProductionStore> ActivityService for ActivityServiceImpl<A, P> {
    async fn create_activity(&self, input: &ActivityInput) -> Result<Activity, ProgressError> {
        let activity = input.validate()?;
        self.activities.insert(&activity).await
    }

    async fn update_activity(
        &self,
        id: ActivityId,
        input: &ActivityInput,
    ) -> Result<Activity, ProgressError> {
        let activity = input.validate()?;
        self.activities
            .update(id, &activity)
            .await?
            .ok_or(ProgressError::ActivityNotFound(id))
    }

    async fn set_goal_points(
        &self,
        id: ActivityId,
        goal_points: i64,
    ) -> Result<i64, ProgressError> {
        if goal_points < 0 {
            return Err(ProgressError::validation("goal_points must be >= 0"));
        }

        if self.activities.set_goal_points(id, goal_points).await? {
            Ok(goal_points)
        } else {
            Err(ProgressError::ActivityNotFound(id))
        }
    }

    async fn delete_activity(&self, id: ActivityId) -> Result<(), ProgressError> {
        self.activities.delete(id).await
    }

    async fn list_with_progress(
        &self,
        order: ActivityOrder,
    ) -> Result<Vec<ActivityProgress>, ProgressError> {
        let rows = self.activities.list_with_completed(order).await?;

        Ok(rows
            .into_iter()
            .map(|(activity, completed)| ActivityProgress::new(activity, completed))
            .collect())
    }

    async fn get_with_progress(&self, id: ActivityId) -> Result<ActivityProgress, ProgressError> {
        let (activity, completed) = self
            .activities
            .get_with_completed(id)
            .await?
            .ok_or(ProgressError::ActivityNotFound(id))?;

        Ok(ActivityProgress::new(activity, completed))
    }

    async fn mark_complete(&self, id: ActivityId) -> Result<String, ProgressError> {
        let name = self
            .activities
            .delete_with_productions(id)
            .await?
            .ok_or(ProgressError::ActivityNotFound(id))?;

        tracing::info!(activity_id = %id, "activity completed and removed with its productions");
        Ok(name)
    }

    async fn reset_progress(&self, id: ActivityId) -> Result<(), ProgressError> {
        if self.activities.get(id).await?.is_none() {
            return Err(ProgressError::ActivityNotFound(id));
        }

        let removed = self.productions.delete_for_activity(id).await?;
        tracing::info!(activity_id = %id, removed, "activity progress reset");
        Ok(())
    }
}
