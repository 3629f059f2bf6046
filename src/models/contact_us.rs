use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Resource;

/// 联系方式
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContactUs {
    pub id: i32,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub map_embed_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateContactUsRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub map_embed_url: Option<String>,
}

impl Resource for ContactUs {
    type Patch = UpdateContactUsRequest;

    const NAME: &'static str = "联系方式";
}
