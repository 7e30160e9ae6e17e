//! Activity storage port (outbound).
//!
//! Defines the interface the domain needs from whatever persists activities.

use async_trait::async_trait;

use crate::domain::{
    models::{Activity, ActivityId, ActivityOrder, NewActivity},
    ProgressError,
};

/// Outbound port for activity persistence.
///
/// Progress reads return the activity together with its completed points
/// so that both come from the same snapshot of the store.
#[async_trait]
pub trait ActivityStore: Send + Sync + 'static {
    /// Insert a new activity, stamping `created_at`.
    async fn insert(&self, activity: &NewActivity) -> Result<Activity, ProgressError>;

    /// Overwrite the mutable fields of an activity.
    ///
    /// Returns `None` if the activity does not exist.
    async fn update(
        &self,
        id: ActivityId,
        activity: &NewActivity,
    ) -> Result<Option<Activity>, ProgressError>;

    /// Set only the goal of an activity. Returns `false` if it does not exist.
    async fn set_goal_points(
        &self,
        id: ActivityId,
        goal_points: i64,
    ) -> Result<bool, ProgressError>;

    /// Remove the activity row only. Unknown ids are not an error.
    async fn delete(&self, id: ActivityId) -> Result<(), ProgressError>;

    async fn get(&self, id: ActivityId) -> Result<Option<Activity>, ProgressError>;

    /// Get an activity together with the sum of its production quantities.
    async fn get_with_completed(
        &self,
        id: ActivityId,
    ) -> Result<Option<(Activity, i64)>, ProgressError>;

    /// List every activity together with the sum of its production quantities.
    async fn list_with_completed(
        &self,
        order: ActivityOrder,
    ) -> Result<Vec<(Activity, i64)>, ProgressError>;

    /// Atomically remove an activity and all of its productions.
    ///
    /// Returns the removed activity's name, or `None` (with nothing
    /// removed) if the activity does not exist.
    async fn delete_with_productions(
        &self,
        id: ActivityId,
    ) -> Result<Option<String>, ProgressError>;
}
