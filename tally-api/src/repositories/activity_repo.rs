use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

use super::repo_error::RepositoryError;

#[async_trait]
pub trait ActivityRepository {
    async fn create_activity(
        &self,
        activity: &NewDatabaseActivity,
    ) -> Result<DatabaseActivity, RepositoryError>;
    async fn update_activity(
        &self,
        id: i64,
        activity: &UpdateDatabaseActivity,
    ) -> Result<Option<DatabaseActivity>, RepositoryError>;
    async fn update_goal_points(&self, id: i64, goal_points: i64)
        -> Result<bool, RepositoryError>;
    async fn delete_activity(&self, id: i64) -> Result<(), RepositoryError>;
    async fn get_activity(&self, id: i64) -> Result<Option<DatabaseActivity>, RepositoryError>;
    async fn get_activity_progress(
        &self,
        id: i64,
    ) -> Result<Option<DatabaseActivityProgress>, RepositoryError>;
    async fn list_activity_progress(
        &self,
        order_by_name: bool,
    ) -> Result<Vec<DatabaseActivityProgress>, RepositoryError>;
    async fn delete_activity_cascade(&self, id: i64) -> Result<Option<String>, RepositoryError>;
}

pub struct ActivityRepositoryImpl {
    pool: SqlitePool,
}

impl ActivityRepositoryImpl {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DatabaseActivity {
    pub id: i64,
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub goal_points: Option<i64>,
    pub created_at: OffsetDateTime,
}

/// An activity row joined with the summed quantity of its productions.
#[derive(Debug, Clone, FromRow)]
pub struct DatabaseActivityProgress {
    #[sqlx(flatten)]
    pub activity: DatabaseActivity,
    pub completed: i64,
}

pub struct NewDatabaseActivity {
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub goal_points: Option<i64>,
    pub created_at: OffsetDateTime,
}

pub struct UpdateDatabaseActivity {
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub goal_points: Option<i64>,
}

const PROGRESS_SELECT: &str = r#"
    SELECT a.id, a.name, a.date, a.description, a.goal_points, a.created_at,
           IFNULL(SUM(p.quantity), 0) AS completed
    FROM activities a
    LEFT JOIN productions p ON p.activity_id = a.id
"#;

#[async_trait]
impl ActivityRepository for ActivityRepositoryImpl {
    async fn create_activity(
        &self,
        activity: &NewDatabaseActivity,
    ) -> Result<DatabaseActivity, RepositoryError> {
        let created = sqlx::query_as::<_, DatabaseActivity>(
            r#"
            INSERT INTO activities (name, date, description, goal_points, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, date, description, goal_points, created_at
            "#,
        )
        .bind(&activity.name)
        .bind(&activity.date)
        .bind(&activity.description)
        .bind(activity.goal_points)
        .bind(activity.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_activity(
        &self,
        id: i64,
        activity: &UpdateDatabaseActivity,
    ) -> Result<Option<DatabaseActivity>, RepositoryError> {
        let updated = sqlx::query_as::<_, DatabaseActivity>(
            r#"
            UPDATE activities
            SET name = ?, date = ?, description = ?, goal_points = ?
            WHERE id = ?
            RETURNING id, name, date, description, goal_points, created_at
            "#,
        )
        .bind(&activity.name)
        .bind(&activity.date)
        .bind(&activity.description)
        .bind(activity.goal_points)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn update_goal_points(
        &self,
        id: i64,
        goal_points: i64,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE activities SET goal_points = ? WHERE id = ?")
            .bind(goal_points)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_activity(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_activity(&self, id: i64) -> Result<Option<DatabaseActivity>, RepositoryError> {
        let activity = sqlx::query_as::<_, DatabaseActivity>(
            r#"
            SELECT id, name, date, description, goal_points, created_at
            FROM activities
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(activity)
    }

    async fn get_activity_progress(
        &self,
        id: i64,
    ) -> Result<Option<DatabaseActivityProgress>, RepositoryError> {
        let query = format!("{PROGRESS_SELECT} WHERE a.id = ? GROUP BY a.id");
        let progress = sqlx::query_as::<_, DatabaseActivityProgress>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(progress)
    }

    async fn list_activity_progress(
        &self,
        order_by_name: bool,
    ) -> Result<Vec<DatabaseActivityProgress>, RepositoryError> {
        let order = if order_by_name {
            "a.name ASC, a.id ASC"
        } else {
            // created_at is RFC 3339 text of varying length; compare it as a time.
            "julianday(a.created_at) DESC, a.id DESC"
        };
        let query = format!("{PROGRESS_SELECT} GROUP BY a.id ORDER BY {order}");

        let rows = sqlx::query_as::<_, DatabaseActivityProgress>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn delete_activity_cascade(&self, id: i64) -> Result<Option<String>, RepositoryError> {
        // Dropping the transaction without committing rolls both deletes back.
        let mut tx = self.pool.begin().await?;

        let name = sqlx::query_scalar::<_, String>("SELECT name FROM activities WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(name) = name else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM productions WHERE activity_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(name))
    }
}
