use crate::{
    database::Database,
    error::{AppError, AppResult},
    models::{BasicCompanyInfo, Resource, UpdateBasicCompanyInfoRequest},
};

use super::ResourceRepository;

/// 公司基本信息仓库
#[derive(Clone)]
pub struct CompanyInfoRepository {
    db: Database,
}

impl CompanyInfoRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ResourceRepository<BasicCompanyInfo> for CompanyInfoRepository {
    async fn find_one(&self, id: i32) -> AppResult<Option<BasicCompanyInfo>> {
        let info = sqlx::query_as::<_, BasicCompanyInfo>(
            r#"
            SELECT
                id, company_name, logo_url, address, phone, email, working_hours,
                created_at, updated_at
            FROM basic_company_info
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(info)
    }

    async fn update(
        &self,
        id: i32,
        request: UpdateBasicCompanyInfoRequest,
    ) -> AppResult<BasicCompanyInfo> {
        let info = sqlx::query_as::<_, BasicCompanyInfo>(
            r#"
            UPDATE basic_company_info SET
                company_name = COALESCE($2, company_name),
                logo_url = COALESCE($3, logo_url),
                address = COALESCE($4, address),
                phone = COALESCE($5, phone),
                email = COALESCE($6, email),
                working_hours = COALESCE($7, working_hours),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, company_name, logo_url, address, phone, email, working_hours,
                created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(request.company_name)
        .bind(request.logo_url)
        .bind(request.address)
        .bind(request.phone)
        .bind(request.email)
        .bind(request.working_hours)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| AppError::not_found(BasicCompanyInfo::NAME))?;

        Ok(info)
    }
}
