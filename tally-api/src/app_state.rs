use std::sync::Arc;

use sqlx::SqlitePool;

use crate::{
    domain::ports::inbound::{ActivityService, ProductionService},
    factory,
};

#[derive(Clone)]
pub struct AppState {
    pub activity_service: Arc<dyn ActivityService>,
    pub production_service: Arc<dyn ProductionService>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        let (activity_service, production_service) = factory::create_services(db_pool);

        Self {
            activity_service,
            production_service,
        }
    }
}
