pub mod content;
pub mod extract;
pub mod system;
pub mod upload;

pub use content::{
    get_about_company, get_banner, get_basic_company_info, get_contact_us, get_user,
    update_about_company, update_banner, update_basic_company_info, update_contact_us,
    update_user,
};
pub use system::{db_health_check, health_check, storage_health_check, system_info};
pub use upload::{upload_file, upload_multiple_files};

use crate::{
    config::Config,
    database::Database,
    error::{AppError, AppResult},
    services::{ContentServices, UploadService},
    storage::S3Storage,
};

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub database: Option<Database>,
    pub storage: Option<S3Storage>,
    pub content: Option<ContentServices>,
    pub uploads: Option<UploadService>,
    pub config: Config,
}

impl AppState {
    /// 内容服务（依赖数据库）
    pub fn content(&self) -> AppResult<&ContentServices> {
        self.content
            .as_ref()
            .ok_or_else(|| AppError::service_unavailable("数据库服务不可用"))
    }

    /// 上传服务（依赖对象存储）
    pub fn uploads(&self) -> AppResult<&UploadService> {
        self.uploads
            .as_ref()
            .ok_or_else(|| AppError::service_unavailable("存储服务不可用"))
    }
}
