use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Resource;

/// 首页横幅
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Banner {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 更新横幅请求
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBannerRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub is_active: Option<bool>,
}

impl Resource for Banner {
    type Patch = UpdateBannerRequest;

    const NAME: &'static str = "横幅";
}
