use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Resource;

/// "关于我们"页面内容
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AboutCompany {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAboutCompanyRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl Resource for AboutCompany {
    type Patch = UpdateAboutCompanyRequest;

    const NAME: &'static str = "关于我们";
}
