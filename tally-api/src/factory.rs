//! Composition root.
//!
//! The only place that names the concrete SQLite adapters and service impls.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::{
    adapters::outbound::sqlite::{SqliteActivityStore, SqliteProductionStore},
    domain::{
        ports::inbound::{ActivityService, ProductionService},
        services::{ActivityServiceImpl, ProductionServiceImpl},
    },
    repositories::{ActivityRepositoryImpl, ProductionRepositoryImpl},
};

/// Build both services over one pool. They share the same store instances.
pub fn create_services(
    pool: SqlitePool,
) -> (Arc<dyn ActivityService>, Arc<dyn ProductionService>) {
    let activity_repo = Arc::new(ActivityRepositoryImpl::new(pool.clone()));
    let production_repo = Arc::new(ProductionRepositoryImpl::new(pool));

    let activities = Arc::new(SqliteActivityStore::new(activity_repo));
    let productions = Arc::new(SqliteProductionStore::new(production_repo));

    let activity_service = ActivityServiceImpl::new(activities.clone(), productions.clone());
    let production_service = ProductionServiceImpl::new(activities, productions);

    (Arc::new(activity_service), Arc::new(production_service))
}
