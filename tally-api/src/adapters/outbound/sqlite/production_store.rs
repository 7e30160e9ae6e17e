use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use super::storage_error;
use crate::domain::{
    models::{ActivityId, NewProduction, Production, ProductionId, ProductionListing},
    ports::outbound::ProductionStore,
    ProgressError,
};
use crate::repositories::{
    DatabaseProduction, NewDatabaseProduction, ProductionRepository, ProductionRepositoryImpl,
    UpdateDatabaseProduction,
};

/// Adapter that implements ProductionStore using SQLite.
pub struct SqliteProductionStore<R = ProductionRepositoryImpl> {
    repo: Arc<R>,
}

impl<R> SqliteProductionStore<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: ProductionRepository + Send + Sync + 'static> ProductionStore
    for SqliteProductionStore<R>
{
    async fn insert(&self, production: &NewProduction) -> Result<Production, ProgressError> {
        let new_production = NewDatabaseProduction {
            title: production.title.clone(),
            quantity: production.quantity,
            description: production.description.clone(),
            activity_id: production.activity_id.as_i64(),
            created_at: OffsetDateTime::now_utc(),
        };

        let created = self
            .repo
            .create_production(&new_production)
            .await
            .map_err(storage_error)?;

        Ok(db_production_to_domain(created))
    }

    async fn update(
        &self,
        id: ProductionId,
        production: &NewProduction,
    ) -> Result<Option<Production>, ProgressError> {
        let update = UpdateDatabaseProduction {
            title: production.title.clone(),
            quantity: production.quantity,
            description: production.description.clone(),
            activity_id: production.activity_id.as_i64(),
        };

        let updated = self
            .repo
            .update_production(id.as_i64(), &update)
            .await
            .map_err(storage_error)?;

        Ok(updated.map(db_production_to_domain))
    }

    async fn delete(&self, id: ProductionId) -> Result<(), ProgressError> {
        self.repo
            .delete_production(id.as_i64())
            .await
            .map_err(storage_error)
    }

    async fn get(&self, id: ProductionId) -> Result<Option<Production>, ProgressError> {
        let production = self
            .repo
            .get_production(id.as_i64())
            .await
            .map_err(storage_error)?;

        Ok(production.map(db_production_to_domain))
    }

    async fn list_all(&self) -> Result<Vec<ProductionListing>, ProgressError> {
        let rows = self.repo.list_productions().await.map_err(storage_error)?;

        Ok(rows
            .into_iter()
            .map(|row| ProductionListing {
                production: db_production_to_domain(row.production),
                activity_name: row.activity_name,
            })
            .collect())
    }

    async fn list_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> Result<Vec<Production>, ProgressError> {
        let rows = self
            .repo
            .list_productions_for_activity(activity_id.as_i64())
            .await
            .map_err(storage_error)?;

        Ok(rows.into_iter().map(db_production_to_domain).collect())
    }

    async fn sum_quantity(&self, activity_id: ActivityId) -> Result<i64, ProgressError> {
        self.repo
            .sum_quantity(activity_id.as_i64())
            .await
            .map_err(storage_error)
    }

    async fn delete_for_activity(&self, activity_id: ActivityId) -> Result<u64, ProgressError> {
        self.repo
            .delete_productions_for_activity(activity_id.as_i64())
            .await
            .map_err(storage_error)
    }
}

/// Convert a database production to a domain Production.
fn db_production_to_domain(production: DatabaseProduction) -> Production {
    Production {
        id: ProductionId::new(production.id),
        title: production.title,
        quantity: production.quantity,
        description: production.description,
        activity_id: ActivityId::new(production.activity_id),
        created_at: production.created_at,
    }
}
