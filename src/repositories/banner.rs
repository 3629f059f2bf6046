use crate::{
    database::Database,
    error::{AppError, AppResult},
    models::{Banner, Resource, UpdateBannerRequest},
};

use super::ResourceRepository;

/// 横幅仓库
#[derive(Clone)]
pub struct BannerRepository {
    db: Database,
}

impl BannerRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ResourceRepository<Banner> for BannerRepository {
    async fn find_one(&self, id: i32) -> AppResult<Option<Banner>> {
        let banner = sqlx::query_as::<_, Banner>(
            r#"
            SELECT id, title, subtitle, image_url, link_url, is_active, created_at, updated_at
            FROM banners
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(banner)
    }

    async fn update(&self, id: i32, request: UpdateBannerRequest) -> AppResult<Banner> {
        let banner = sqlx::query_as::<_, Banner>(
            r#"
            UPDATE banners SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                image_url = COALESCE($4, image_url),
                link_url = COALESCE($5, link_url),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, subtitle, image_url, link_url, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(request.title)
        .bind(request.subtitle)
        .bind(request.image_url)
        .bind(request.link_url)
        .bind(request.is_active)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| AppError::not_found(Banner::NAME))?;

        Ok(banner)
    }
}
