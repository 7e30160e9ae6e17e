use async_trait::async_trait;

use crate::domain::{
    models::{ActivityId, Production, ProductionId, ProductionInput, ProductionListing},
    ProgressError,
};

/// Inbound port for the production ledger.
#[async_trait]
pub trait ProductionService: Send + Sync + 'static {
    /// Log a production against an existing activity.
    ///
    /// The title is copied from the activity's current name.
    async fn create_production(
        &self,
        input: &ProductionInput,
    ) -> Result<Production, ProgressError>;

    /// Replace a production, re-deriving its title from the referenced activity.
    async fn update_production(
        &self,
        id: ProductionId,
        input: &ProductionInput,
    ) -> Result<Production, ProgressError>;

    async fn delete_production(&self, id: ProductionId) -> Result<(), ProgressError>;

    async fn get_production(&self, id: ProductionId) -> Result<Production, ProgressError>;

    /// All productions, newest first, with their activity name when it still exists.
    async fn list_productions(&self) -> Result<Vec<ProductionListing>, ProgressError>;

    /// Productions of one activity, newest first.
    async fn list_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> Result<Vec<Production>, ProgressError>;

    /// Completed points of an activity.
    async fn aggregate_for(&self, activity_id: ActivityId) -> Result<i64, ProgressError>;
}
