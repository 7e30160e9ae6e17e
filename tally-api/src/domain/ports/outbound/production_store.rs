//! Production storage port (outbound).

use async_trait::async_trait;

use crate::domain::{
    models::{ActivityId, NewProduction, Production, ProductionId, ProductionListing},
    ProgressError,
};

/// Outbound port for production persistence.
#[async_trait]
pub trait ProductionStore: Send + Sync + 'static {
    /// Insert a new production, stamping `created_at`.
    async fn insert(&self, production: &NewProduction) -> Result<Production, ProgressError>;

    /// Overwrite a production. Returns `None` if it does not exist.
    async fn update(
        &self,
        id: ProductionId,
        production: &NewProduction,
    ) -> Result<Option<Production>, ProgressError>;

    /// Unknown ids are not an error.
    async fn delete(&self, id: ProductionId) -> Result<(), ProgressError>;

    async fn get(&self, id: ProductionId) -> Result<Option<Production>, ProgressError>;

    /// All productions, newest first, with their activity's current name.
    async fn list_all(&self) -> Result<Vec<ProductionListing>, ProgressError>;

    /// Productions of a single activity, newest first.
    async fn list_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> Result<Vec<Production>, ProgressError>;

    /// Sum of quantities for an activity; zero when there are none.
    async fn sum_quantity(&self, activity_id: ActivityId) -> Result<i64, ProgressError>;

    /// Remove all productions of an activity, returning how many were removed.
    async fn delete_for_activity(&self, activity_id: ActivityId) -> Result<u64, ProgressError>;
}
