pub mod s3;

pub use s3::S3Storage;

use bytes::Bytes;

use crate::error::AppResult;

/// 对象存储抽象接口
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 以公开可读权限写入对象
    async fn put_public(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()>;

    /// 对象的公网访问地址
    fn public_url(&self, key: &str) -> String;
}
