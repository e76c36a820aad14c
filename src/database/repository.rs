use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{NewPost, NewUser, Post, User};

/// Persistence operations the HTTP handlers depend on.
///
/// Every write runs in its own transaction: a failed statement rolls back,
/// a successful one commits before the call returns.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User, DatabaseError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;

    async fn create_post(&self, new_post: NewPost) -> Result<Post, DatabaseError>;

    async fn posts_for_user(&self, user_id: i64) -> Result<Vec<Post>, DatabaseError>;

    async fn find_post(&self, id: i64) -> Result<Option<Post>, DatabaseError>;

    async fn delete_post(&self, id: i64) -> Result<(), DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}

const USER_COLUMNS: &str = "id, email, password, is_active";
const POST_COLUMNS: &str = "id, description, src, user_id, time";

/// PostgreSQL-backed repository over a shared pool.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn create_user(&self, new_user: NewUser) -> Result<User, DatabaseError> {
        let sql = format!(
            "INSERT INTO users (email, password, is_active) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let inserted = sqlx::query_as::<_, User>(&sql)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .bind(new_user.is_active)
            .fetch_one(&mut *tx)
            .await;

        let user = match inserted {
            Ok(user) => user,
            Err(e) => {
                tx.rollback().await?;
                return Err(e.into());
            }
        };

        tx.commit().await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let sql = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create_post(&self, new_post: NewPost) -> Result<Post, DatabaseError> {
        let sql = format!(
            "INSERT INTO posts (description, src, user_id, time) VALUES ($1, $2, $3, $4) RETURNING {}",
            POST_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let inserted = sqlx::query_as::<_, Post>(&sql)
            .bind(&new_post.description)
            .bind(&new_post.src)
            .bind(new_post.user_id)
            .bind(new_post.time)
            .fetch_one(&mut *tx)
            .await;

        let post = match inserted {
            Ok(post) => post,
            Err(e) => {
                tx.rollback().await?;
                return Err(e.into());
            }
        };

        tx.commit().await?;
        Ok(post)
    }

    async fn posts_for_user(&self, user_id: i64) -> Result<Vec<Post>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM posts WHERE user_id = $1 ORDER BY id",
            POST_COLUMNS
        );

        let posts = sqlx::query_as::<_, Post>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn find_post(&self, id: i64) -> Result<Option<Post>, DatabaseError> {
        let sql = format!("SELECT {} FROM posts WHERE id = $1", POST_COLUMNS);

        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn delete_post(&self, id: i64) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await;

        if let Err(e) = deleted {
            tx.rollback().await?;
            return Err(e.into());
        }

        tx.commit().await?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
