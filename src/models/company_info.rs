use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Resource;

/// 公司基本信息
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BasicCompanyInfo {
    pub id: i32,
    pub company_name: String,
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// 营业时间，自由文本（如 "Mon-Fri 09:00-18:00"）
    pub working_hours: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 更新公司基本信息请求
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBasicCompanyInfoRequest {
    pub company_name: Option<String>,
    pub logo_url: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub working_hours: Option<String>,
}

impl Resource for BasicCompanyInfo {
    type Patch = UpdateBasicCompanyInfoRequest;

    const NAME: &'static str = "公司基本信息";
}
