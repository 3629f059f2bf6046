use crate::{
    database::Database,
    error::{AppError, AppResult},
    models::{ContactUs, Resource, UpdateContactUsRequest},
};

use super::ResourceRepository;

#[derive(Clone)]
pub struct ContactUsRepository {
    db: Database,
}

impl ContactUsRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ResourceRepository<ContactUs> for ContactUsRepository {
    async fn find_one(&self, id: i32) -> AppResult<Option<ContactUs>> {
        let contact = sqlx::query_as::<_, ContactUs>(
            r#"
            SELECT id, email, phone, address, map_embed_url, created_at, updated_at
            FROM contact_us
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(contact)
    }

    async fn update(&self, id: i32, request: UpdateContactUsRequest) -> AppResult<ContactUs> {
        let contact = sqlx::query_as::<_, ContactUs>(
            r#"
            UPDATE contact_us SET
                email = COALESCE($2, email),
                phone = COALESCE($3, phone),
                address = COALESCE($4, address),
                map_embed_url = COALESCE($5, map_embed_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, phone, address, map_embed_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(request.email)
        .bind(request.phone)
        .bind(request.address)
        .bind(request.map_embed_url)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| AppError::not_found(ContactUs::NAME))?;

        Ok(contact)
    }
}
