use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

use super::repo_error::RepositoryError;

#[async_trait]
pub trait ProductionRepository {
    async fn create_production(
        &self,
        production: &NewDatabaseProduction,
    ) -> Result<DatabaseProduction, RepositoryError>;
    async fn update_production(
        &self,
        id: i64,
        production: &UpdateDatabaseProduction,
    ) -> Result<Option<DatabaseProduction>, RepositoryError>;
    async fn delete_production(&self, id: i64) -> Result<(), RepositoryError>;
    async fn get_production(&self, id: i64)
        -> Result<Option<DatabaseProduction>, RepositoryError>;
    async fn list_productions(&self) -> Result<Vec<DatabaseProductionListing>, RepositoryError>;
    async fn list_productions_for_activity(
        &self,
        activity_id: i64,
    ) -> Result<Vec<DatabaseProduction>, RepositoryError>;
    async fn sum_quantity(&self, activity_id: i64) -> Result<i64, RepositoryError>;
    async fn delete_productions_for_activity(
        &self,
        activity_id: i64,
    ) -> Result<u64, RepositoryError>;
}

pub struct ProductionRepositoryImpl {
    pool: SqlitePool,
}

impl ProductionRepositoryImpl {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DatabaseProduction {
    pub id: i64,
    pub title: String,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub activity_id: i64,
    pub created_at: OffsetDateTime,
}

/// A production row left-joined with its activity's name.
#[derive(Debug, Clone, FromRow)]
pub struct DatabaseProductionListing {
    #[sqlx(flatten)]
    pub production: DatabaseProduction,
    pub activity_name: Option<String>,
}

pub struct NewDatabaseProduction {
    pub title: String,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub activity_id: i64,
    pub created_at: OffsetDateTime,
}

pub struct UpdateDatabaseProduction {
    pub title: String,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub activity_id: i64,
}

#[async_trait]
impl ProductionRepository for ProductionRepositoryImpl {
    async fn create_production(
        &self,
        production: &NewDatabaseProduction,
    ) -> Result<DatabaseProduction, RepositoryError> {
        let created = sqlx::query_as::<_, DatabaseProduction>(
            r#"
            INSERT INTO productions (title, quantity, description, activity_id, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, quantity, description, activity_id, created_at
            "#,
        )
        .bind(&production.title)
        .bind(production.quantity)
        .bind(&production.description)
        .bind(production.activity_id)
        .bind(production.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_production(
        &self,
        id: i64,
        production: &UpdateDatabaseProduction,
    ) -> Result<Option<DatabaseProduction>, RepositoryError> {
        let updated = sqlx::query_as::<_, DatabaseProduction>(
            r#"
            UPDATE productions
            SET title = ?, quantity = ?, description = ?, activity_id = ?
            WHERE id = ?
            RETURNING id, title, quantity, description, activity_id, created_at
            "#,
        )
        .bind(&production.title)
        .bind(production.quantity)
        .bind(&production.description)
        .bind(production.activity_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_production(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM productions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_production(
        &self,
        id: i64,
    ) -> Result<Option<DatabaseProduction>, RepositoryError> {
        let production = sqlx::query_as::<_, DatabaseProduction>(
            r#"
            SELECT id, title, quantity, description, activity_id, created_at
            FROM productions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(production)
    }

    async fn list_productions(&self) -> Result<Vec<DatabaseProductionListing>, RepositoryError> {
        let productions = sqlx::query_as::<_, DatabaseProductionListing>(
            r#"
            SELECT p.id, p.title, p.quantity, p.description, p.activity_id, p.created_at,
                   a.name AS activity_name
            FROM productions p
            LEFT JOIN activities a ON p.activity_id = a.id
            ORDER BY julianday(p.created_at) DESC, p.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(productions)
    }

    async fn list_productions_for_activity(
        &self,
        activity_id: i64,
    ) -> Result<Vec<DatabaseProduction>, RepositoryError> {
        let productions = sqlx::query_as::<_, DatabaseProduction>(
            r#"
            SELECT id, title, quantity, description, activity_id, created_at
            FROM productions
            WHERE activity_id = ?
            ORDER BY julianday(created_at) DESC, id DESC
            "#,
        )
        .bind(activity_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(productions)
    }

    async fn sum_quantity(&self, activity_id: i64) -> Result<i64, RepositoryError> {
        let completed = sqlx::query_scalar::<_, i64>(
            "SELECT IFNULL(SUM(quantity), 0) FROM productions WHERE activity_id = ?",
        )
        .bind(activity_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(completed)
    }

    async fn delete_productions_for_activity(
        &self,
        activity_id: i64,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM productions WHERE activity_id = ?")
            .bind(activity_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    use crate::repositories::{
        test_utils::memory_pool, ActivityRepository, ActivityRepositoryImpl, NewDatabaseActivity,
    };

    async fn seed_activity(pool: &SqlitePool, name: &str) -> i64 {
        ActivityRepositoryImpl::new(pool.clone())
            .create_activity(&NewDatabaseActivity {
                name: name.to_string(),
                date: None,
                description: None,
                goal_points: None,
                created_at: OffsetDateTime::now_utc(),
            })
            .await
            .unwrap()
            .id
    }

    fn new_production(activity_id: i64, quantity: Option<i64>) -> NewDatabaseProduction {
        NewDatabaseProduction {
            title: "Run".to_string(),
            quantity,
            description: Some("morning".to_string()),
            activity_id,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn sum_is_zero_without_rows() {
        let pool = memory_pool().await;
        let productions = ProductionRepositoryImpl::new(pool);
        assert_eq!(productions.sum_quantity(1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn null_quantity_round_trips_as_none() {
        let pool = memory_pool().await;
        let activity_id = seed_activity(&pool, "Run").await;
        let productions = ProductionRepositoryImpl::new(pool);

        let created = productions
            .create_production(&new_production(activity_id, None))
            .await
            .unwrap();
        let stored = productions.get_production(created.id).await.unwrap().unwrap();

        assert_eq!(stored.quantity, None);
        assert_eq!(stored.description.as_deref(), Some("morning"));
        assert_eq!(productions.sum_quantity(activity_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn listing_joins_activity_name_newest_first() {
        let pool = memory_pool().await;
        let run = seed_activity(&pool, "Run").await;
        let productions = ProductionRepositoryImpl::new(pool);

        let first = productions
            .create_production(&new_production(run, Some(1)))
            .await
            .unwrap();
        let dangling = productions
            .create_production(&new_production(404, Some(2)))
            .await
            .unwrap();

        let listings = productions.list_productions().await.unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].production.id, dangling.id);
        assert_eq!(listings[0].activity_name, None);
        assert_eq!(listings[1].production.id, first.id);
        assert_eq!(listings[1].activity_name.as_deref(), Some("Run"));
    }

    #[tokio::test]
    async fn listings_order_by_time_within_a_second() {
        let pool = memory_pool().await;
        let run = seed_activity(&pool, "Run").await;
        let productions = ProductionRepositoryImpl::new(pool);

        let mut ids = Vec::new();
        for created_at in [
            datetime!(2024-06-01 12:00:00.12 UTC),
            datetime!(2024-06-01 12:00:00.1 UTC),
        ] {
            let production = productions
                .create_production(&NewDatabaseProduction {
                    created_at,
                    ..new_production(run, Some(1))
                })
                .await
                .unwrap();
            ids.push(production.id);
        }

        let listed: Vec<_> = productions
            .list_productions()
            .await
            .unwrap()
            .into_iter()
            .map(|listing| listing.production.id)
            .collect();
        assert_eq!(listed, ids);

        let for_activity: Vec<_> = productions
            .list_productions_for_activity(run)
            .await
            .unwrap()
            .into_iter()
            .map(|production| production.id)
            .collect();
        assert_eq!(for_activity, ids);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_ids() {
        let pool = memory_pool().await;
        let productions = ProductionRepositoryImpl::new(pool);
        let update = UpdateDatabaseProduction {
            title: "Run".to_string(),
            quantity: Some(1),
            description: None,
            activity_id: 1,
        };

        assert!(productions.update_production(9, &update).await.unwrap().is_none());
        productions.delete_production(9).await.unwrap();
        assert_eq!(productions.delete_productions_for_activity(9).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_for_activity_counts_rows() {
        let pool = memory_pool().await;
        let run = seed_activity(&pool, "Run").await;
        let swim = seed_activity(&pool, "Swim").await;
        let productions = ProductionRepositoryImpl::new(pool);

        for quantity in [1, 2, 3] {
            productions
                .create_production(&new_production(run, Some(quantity)))
                .await
                .unwrap();
        }
        productions
            .create_production(&new_production(swim, Some(10)))
            .await
            .unwrap();

        assert_eq!(productions.delete_productions_for_activity(run).await.unwrap(), 3);
        assert!(productions
            .list_productions_for_activity(run)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(productions.sum_quantity(swim).await.unwrap(), 10);
    }
}
