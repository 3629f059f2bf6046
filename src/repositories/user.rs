use crate::{
    database::Database,
    error::{AppError, AppResult},
    models::{Resource, UpdateUserRequest, User},
};

use super::ResourceRepository;

/// 用户仓库
#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ResourceRepository<User> for UserRepository {
    async fn find_one(&self, id: i32) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, full_name, avatar_url, is_active, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(user)
    }

    async fn update(&self, id: i32, request: UpdateUserRequest) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                full_name = COALESCE($3, full_name),
                avatar_url = COALESCE($4, avatar_url),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, full_name, avatar_url, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(request.email)
        .bind(request.full_name)
        .bind(request.avatar_url)
        .bind(request.is_active)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| AppError::not_found(User::NAME))?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    fn repository(pool: &PgPool) -> UserRepository {
        UserRepository::new(Database::from_pool(pool.clone()))
    }

    async fn insert_user(pool: &PgPool, id: i32, email: &str, full_name: &str) {
        sqlx::query("INSERT INTO users (id, email, full_name) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(email)
            .bind(full_name)
            .execute(pool)
            .await
            .unwrap();
    }

    #[sqlx::test(migrations = false, fixtures(path = "../../sql", scripts("init")))]
    async fn test_update_targets_only_given_id(pool: PgPool) {
        insert_user(&pool, 1, "a@example.com", "甲").await;
        insert_user(&pool, 2, "b@example.com", "乙").await;
        let repo = repository(&pool);

        let request = UpdateUserRequest {
            full_name: Some("丙".to_string()),
            ..Default::default()
        };
        let updated = repo.update(2, request).await.unwrap();
        assert_eq!(updated.full_name.as_deref(), Some("丙"));
        assert_eq!(updated.email, "b@example.com");
        assert!(updated.is_active);

        let untouched = repo.find_one(1).await.unwrap().unwrap();
        assert_eq!(untouched.full_name.as_deref(), Some("甲"));

        assert!(repo.find_one(3).await.unwrap().is_none());
        let missing = repo.update(3, UpdateUserRequest::default()).await;
        assert!(matches!(missing, Err(AppError::NotFound { .. })));
    }
}
