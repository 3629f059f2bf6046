// 服务层模块
pub mod resource;
pub mod upload;

pub use resource::{ContentServices, ResourceService};
pub use upload::UploadService;
