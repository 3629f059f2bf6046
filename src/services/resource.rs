use std::sync::Arc;

use crate::{
    database::Database,
    error::AppResult,
    models::{AboutCompany, Banner, BasicCompanyInfo, ContactUs, Resource, SINGLETON_ID, User},
    repositories::{
        AboutCompanyRepository, BannerRepository, CompanyInfoRepository, ContactUsRepository,
        ResourceRepository, UserRepository,
    },
};

/// 资源服务：读取与局部更新，直接委托给仓库
pub struct ResourceService<R: Resource> {
    repository: Arc<dyn ResourceRepository<R>>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(repository: Arc<dyn ResourceRepository<R>>) -> Self {
        Self { repository }
    }

    /// 读取单例记录，不存在时返回 None
    pub async fn find_one(&self) -> AppResult<Option<R>> {
        self.find_by_id(SINGLETON_ID).await
    }

    /// 更新单例记录
    pub async fn update(&self, patch: R::Patch) -> AppResult<R> {
        self.update_by_id(SINGLETON_ID, patch).await
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<R>> {
        let record = self.repository.find_one(id).await?;
        if record.is_none() {
            tracing::debug!("{} 记录不存在: id={}", R::NAME, id);
        }
        Ok(record)
    }

    pub async fn update_by_id(&self, id: i32, patch: R::Patch) -> AppResult<R> {
        let record = self.repository.update(id, patch).await?;
        tracing::info!("已更新{}: id={}", R::NAME, id);
        Ok(record)
    }
}

/// 站点内容相关的全部资源服务
#[derive(Clone)]
pub struct ContentServices {
    pub banners: ResourceService<Banner>,
    pub company_info: ResourceService<BasicCompanyInfo>,
    pub about_companies: ResourceService<AboutCompany>,
    pub contact_us: ResourceService<ContactUs>,
    pub users: ResourceService<User>,
}

impl ContentServices {
    /// 基于共享连接池构建所有资源服务
    pub fn from_database(db: &Database) -> Self {
        Self {
            banners: ResourceService::new(Arc::new(BannerRepository::new(db.clone()))),
            company_info: ResourceService::new(Arc::new(CompanyInfoRepository::new(db.clone()))),
            about_companies: ResourceService::new(Arc::new(AboutCompanyRepository::new(
                db.clone(),
            ))),
            contact_us: ResourceService::new(Arc::new(ContactUsRepository::new(db.clone()))),
            users: ResourceService::new(Arc::new(UserRepository::new(db.clone()))),
        }
    }
}
