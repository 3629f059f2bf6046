//! 测试用内存仓库

use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::ResourceRepository;
use crate::{
    error::{AppError, AppResult},
    models::{AboutCompany, Banner, BasicCompanyInfo, ContactUs, Resource, User},
};

/// 在内存记录上模拟 `COALESCE` 局部更新
pub trait InMemoryRecord: Resource {
    fn id(&self) -> i32;

    fn apply(&mut self, patch: Self::Patch);
}

fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

fn merge_optional<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

impl InMemoryRecord for Banner {
    fn id(&self) -> i32 {
        self.id
    }

    fn apply(&mut self, patch: Self::Patch) {
        merge(&mut self.title, patch.title);
        merge_optional(&mut self.subtitle, patch.subtitle);
        merge_optional(&mut self.image_url, patch.image_url);
        merge_optional(&mut self.link_url, patch.link_url);
        merge(&mut self.is_active, patch.is_active);
        self.updated_at = Utc::now();
    }
}

impl InMemoryRecord for BasicCompanyInfo {
    fn id(&self) -> i32 {
        self.id
    }

    fn apply(&mut self, patch: Self::Patch) {
        merge(&mut self.company_name, patch.company_name);
        merge_optional(&mut self.logo_url, patch.logo_url);
        merge_optional(&mut self.address, patch.address);
        merge_optional(&mut self.phone, patch.phone);
        merge_optional(&mut self.email, patch.email);
        merge_optional(&mut self.working_hours, patch.working_hours);
        self.updated_at = Utc::now();
    }
}

impl InMemoryRecord for AboutCompany {
    fn id(&self) -> i32 {
        self.id
    }

    fn apply(&mut self, patch: Self::Patch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.content, patch.content);
        merge_optional(&mut self.image_url, patch.image_url);
        self.updated_at = Utc::now();
    }
}

impl InMemoryRecord for ContactUs {
    fn id(&self) -> i32 {
        self.id
    }

    fn apply(&mut self, patch: Self::Patch) {
        merge_optional(&mut self.email, patch.email);
        merge_optional(&mut self.phone, patch.phone);
        merge_optional(&mut self.address, patch.address);
        merge_optional(&mut self.map_embed_url, patch.map_embed_url);
        self.updated_at = Utc::now();
    }
}

impl InMemoryRecord for User {
    fn id(&self) -> i32 {
        self.id
    }

    fn apply(&mut self, patch: Self::Patch) {
        merge(&mut self.email, patch.email);
        merge_optional(&mut self.full_name, patch.full_name);
        merge_optional(&mut self.avatar_url, patch.avatar_url);
        merge(&mut self.is_active, patch.is_active);
        self.updated_at = Utc::now();
    }
}

pub struct MemoryRepository<R> {
    records: RwLock<HashMap<i32, R>>,
}

impl<R: InMemoryRecord> MemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.id(), r)).collect()),
        }
    }
}

#[async_trait::async_trait]
impl<R: InMemoryRecord> ResourceRepository<R> for MemoryRepository<R> {
    async fn find_one(&self, id: i32) -> AppResult<Option<R>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update(&self, id: i32, patch: R::Patch) -> AppResult<R> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(R::NAME))?;
        record.apply(patch);
        Ok(record.clone())
    }
}
