pub mod about_company;
pub mod banner;
pub mod company_info;
pub mod contact_us;
#[cfg(test)]
pub mod memory;
pub mod user;

pub use about_company::AboutCompanyRepository;
pub use banner::BannerRepository;
pub use company_info::CompanyInfoRepository;
pub use contact_us::ContactUsRepository;
pub use user::UserRepository;

use crate::{error::AppResult, models::Resource};

/// 资源仓库接口：按ID读取、按ID局部更新
#[async_trait::async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// 根据ID查找记录，不存在时返回 None
    async fn find_one(&self, id: i32) -> AppResult<Option<R>>;

    /// 局部更新记录，补丁中缺省的字段保持不变
    async fn update(&self, id: i32, patch: R::Patch) -> AppResult<R>;
}
