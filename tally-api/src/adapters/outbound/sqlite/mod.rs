//! SQLite implementations of the domain storage ports.

mod activity_store;
mod production_store;

pub use activity_store::SqliteActivityStore;
pub use production_store::SqliteProductionStore;

use crate::{domain::ProgressError, repositories::RepositoryError};

fn storage_error(err: RepositoryError) -> ProgressError {
    ProgressError::storage(err.to_string())
}
