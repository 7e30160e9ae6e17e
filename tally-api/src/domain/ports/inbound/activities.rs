use async_trait::async_trait;

use crate::domain::{
    models::{Activity, ActivityId, ActivityInput, ActivityOrder, ActivityProgress},
    ProgressError,
};

/// Inbound port for activity registry and lifecycle operations.
///
/// This trait defines the use cases that HTTP handlers can invoke.
#[async_trait]
pub trait ActivityService: Send + Sync + 'static {
    // ========================================================================
    // Registry
    // ========================================================================

    /// Create an activity. Fails if the name is blank.
    async fn create_activity(&self, input: &ActivityInput) -> Result<Activity, ProgressError>;

    /// Replace the mutable fields of an activity.
    async fn update_activity(
        &self,
        id: ActivityId,
        input: &ActivityInput,
    ) -> Result<Activity, ProgressError>;

    /// Set the goal of an activity, rejecting negative values.
    async fn set_goal_points(
        &self,
        id: ActivityId,
        goal_points: i64,
    ) -> Result<i64, ProgressError>;

    /// Delete the activity only; its productions are left in place.
    async fn delete_activity(&self, id: ActivityId) -> Result<(), ProgressError>;

    /// Every activity with its progress, in the requested order.
    async fn list_with_progress(
        &self,
        order: ActivityOrder,
    ) -> Result<Vec<ActivityProgress>, ProgressError>;

    async fn get_with_progress(&self, id: ActivityId) -> Result<ActivityProgress, ProgressError>;

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Remove the activity and all of its productions as one unit.
    ///
    /// Returns the name of the removed activity.
    async fn mark_complete(&self, id: ActivityId) -> Result<String, ProgressError>;

    /// Remove all productions of the activity, keeping the activity itself.
    async fn reset_progress(&self, id: ActivityId) -> Result<(), ProgressError>;
}
