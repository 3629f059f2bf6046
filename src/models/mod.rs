pub mod about_company;
pub mod banner;
pub mod company_info;
pub mod contact_us;
pub mod upload;
pub mod user;

pub use about_company::*;
pub use banner::*;
pub use company_info::*;
pub use contact_us::*;
pub use upload::*;
pub use user::*;

use serde::{Serialize, de::DeserializeOwned};

/// 单例资源所在行的ID（横幅、公司信息等每类只维护一条记录）
pub const SINGLETON_ID: i32 = 1;

/// 可读取、可局部更新的资源记录
pub trait Resource: Serialize + Clone + Send + Sync + 'static {
    /// 局部更新请求，缺省字段保持原值
    type Patch: DeserializeOwned + Send + Sync + 'static;

    /// 资源名称，用于日志与错误信息
    const NAME: &'static str;
}
