mod activity_repo;
mod production_repo;
mod repo_error;

pub use activity_repo::*;
pub use production_repo::*;
pub use repo_error::RepositoryError;

use sqlx::SqlitePool;

/// Apply the embedded schema migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::migrate!().run(pool).await?;
    Ok(())
}
