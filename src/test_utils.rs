//! 测试辅助：内存对象存储、示例记录与应用状态

use std::{collections::HashMap, sync::Arc, time::Duration};

use bytes::Bytes;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    handlers::AppState,
    models::{AboutCompany, Banner, BasicCompanyInfo, ContactUs, SINGLETON_ID, User},
    repositories::memory::MemoryRepository,
    services::{ContentServices, ResourceService, UploadService},
    storage::{Storage, s3::public_object_url},
};

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Bytes,
    pub content_type: String,
}

/// 内存对象存储，可按内容注入失败或延迟
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
    fail_on: Vec<Bytes>,
    delays: Vec<(Bytes, Duration)>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内容等于 `data` 的上传将失败
    pub fn fail_on(mut self, data: &'static [u8]) -> Self {
        self.fail_on.push(Bytes::from_static(data));
        self
    }

    /// 内容等于 `data` 的上传会先等待 `delay`
    pub fn delay_on(mut self, data: &'static [u8], delay: Duration) -> Self {
        self.delays.push((Bytes::from_static(data), delay));
        self
    }

    pub async fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.objects.lock().await.len()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn put_public(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()> {
        if let Some((_, delay)) = self.delays.iter().find(|(d, _)| *d == data) {
            tokio::time::sleep(*delay).await;
        }

        if self.fail_on.contains(&data) {
            return Err(AppError::storage(format!("上传文件失败: AccessDenied ({})", key)));
        }

        self.objects.lock().await.insert(
            key.to_string(),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        public_object_url("test-bucket", "us-east-1", key)
    }
}

pub fn sample_banner() -> Banner {
    let now = Utc::now();
    Banner {
        id: SINGLETON_ID,
        title: "欢迎".to_string(),
        subtitle: Some("副标题".to_string()),
        image_url: Some("https://cdn.example.com/hero.png".to_string()),
        link_url: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_company_info() -> BasicCompanyInfo {
    let now = Utc::now();
    BasicCompanyInfo {
        id: SINGLETON_ID,
        company_name: "示例科技".to_string(),
        logo_url: None,
        address: Some("上海市浦东新区".to_string()),
        phone: Some("+86 21 0000 0000".to_string()),
        email: Some("hello@example.com".to_string()),
        working_hours: Some("Mon-Fri 09:00-18:00".to_string()),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_user(id: i32) -> User {
    let now = Utc::now();
    User {
        id,
        email: format!("user{}@example.com", id),
        full_name: Some(format!("用户{}", id)),
        avatar_url: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// 以内存仓库构建的内容服务；关于我们与联系方式为空
pub fn memory_content_services() -> ContentServices {
    ContentServices {
        banners: ResourceService::new(Arc::new(MemoryRepository::with_records(vec![
            sample_banner(),
        ]))),
        company_info: ResourceService::new(Arc::new(MemoryRepository::with_records(vec![
            sample_company_info(),
        ]))),
        about_companies: ResourceService::new(Arc::new(MemoryRepository::<AboutCompany>::new())),
        contact_us: ResourceService::new(Arc::new(MemoryRepository::<ContactUs>::new())),
        users: ResourceService::new(Arc::new(MemoryRepository::with_records(vec![
            sample_user(1),
            sample_user(2),
        ]))),
    }
}

pub fn test_state(storage: Arc<MemoryStorage>) -> AppState {
    AppState {
        database: None,
        storage: None,
        content: Some(memory_content_services()),
        uploads: Some(UploadService::new(storage)),
        config: Config::default(),
    }
}
