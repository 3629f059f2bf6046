use crate::{
    database::Database,
    error::{AppError, AppResult},
    models::{AboutCompany, Resource, UpdateAboutCompanyRequest},
};

use super::ResourceRepository;

#[derive(Clone)]
pub struct AboutCompanyRepository {
    db: Database,
}

impl AboutCompanyRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ResourceRepository<AboutCompany> for AboutCompanyRepository {
    async fn find_one(&self, id: i32) -> AppResult<Option<AboutCompany>> {
        let about = sqlx::query_as::<_, AboutCompany>(
            r#"
            SELECT id, title, content, image_url, created_at, updated_at
            FROM about_companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(about)
    }

    async fn update(&self, id: i32, request: UpdateAboutCompanyRequest) -> AppResult<AboutCompany> {
        let about = sqlx::query_as::<_, AboutCompany>(
            r#"
            UPDATE about_companies SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                image_url = COALESCE($4, image_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, image_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(request.title)
        .bind(request.content)
        .bind(request.image_url)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| AppError::not_found(AboutCompany::NAME))?;

        Ok(about)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SINGLETON_ID;
    use sqlx::PgPool;

    #[sqlx::test(migrations = false, fixtures(path = "../../sql", scripts("init")))]
    async fn test_find_and_partial_update(pool: PgPool) {
        let repo = AboutCompanyRepository::new(Database::from_pool(pool.clone()));
        assert!(repo.find_one(SINGLETON_ID).await.unwrap().is_none());

        sqlx::query("INSERT INTO about_companies (id, title, content) VALUES ($1, $2, $3)")
            .bind(SINGLETON_ID)
            .bind("关于我们")
            .bind("公司简介")
            .execute(&pool)
            .await
            .unwrap();

        let request = UpdateAboutCompanyRequest {
            image_url: Some("https://cdn.example.com/about.png".to_string()),
            ..Default::default()
        };
        let updated = repo.update(SINGLETON_ID, request).await.unwrap();

        assert_eq!(updated.title, "关于我们");
        assert_eq!(updated.content, "公司简介");
        assert_eq!(
            updated.image_url.as_deref(),
            Some("https://cdn.example.com/about.png")
        );
    }
}
