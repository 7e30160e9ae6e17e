use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{
        ActivityId, NewProduction, Production, ProductionId, ProductionInput, ProductionListing,
    },
    ports::{
        inbound::ProductionService,
        outbound::{ActivityStore, ProductionStore},
    },
    ProgressError,
};

/// Implementation of the ProductionService inbound port.
///
/// Needs the ActivityStore to check the activity reference and copy the
/// activity name into the production title.
pub struct ProductionServiceImpl<A, P> {
    activities: Arc<A>,
    productions: Arc<P>,
}

impl<A, P> ProductionServiceImpl<A, P> {
    pub fn new(activities: Arc<A>, productions: Arc<P>) -> Self {
        Self {
            activities,
            productions,
        }
    }
}

impl<A: ActivityStore, P> ProductionServiceImpl<A, P> {
    /// Validate the input and resolve its activity into a titled production.
    async fn resolve(&self, input: &ProductionInput) -> Result<NewProduction, ProgressError> {
        let parsed = input.parse()?;
        let activity = self
            .activities
            .get(parsed.activity_id)
            .await?
            .ok_or_else(|| ProgressError::validation("activity not found"))?;

        Ok(parsed.titled(activity.name))
    }
}

#[async_trait]
impl<A: ActivityStore, P: ProductionStore> ProductionService for ProductionServiceImpl<A, P> {
    async fn create_production(
        &self,
        input: &ProductionInput,
    ) -> Result<Production, ProgressError> {
        let production = self.resolve(input).await?;
        self.productions.insert(&production).await
    }

    async fn update_production(
        &self,
        id: ProductionId,
        input: &ProductionInput,
    ) -> Result<Production, ProgressError> {
        let production = self.resolve(input).await?;
        self.productions
            .update(id, &production)
            .await?
            .ok_or(ProgressError::ProductionNotFound(id))
    }

    async fn delete_production(&self, id: ProductionId) -> Result<(), ProgressError> {
        self.productions.delete(id).await
    }

    async fn get_production(&self, id: ProductionId) -> Result<Production, ProgressError> {
        self.productions
            .get(id)
            .await?
            .ok_or(ProgressError::ProductionNotFound(id))
    }

    async fn list_productions(&self) -> Result<Vec<ProductionListing>, ProgressError> {
        self.productions.list_all().await
    }

    async fn list_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> Result<Vec<Production>, ProgressError> {
        self.productions.list_for_activity(activity_id).await
    }

    async fn aggregate_for(&self, activity_id: ActivityId) -> Result<i64, ProgressError> {
        self.productions.sum_quantity(activity_id).await
    }
}
