use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 待上传的内存文件
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub buffer: Bytes,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
}

impl UploadFile {
    pub fn new(
        buffer: Bytes,
        original_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        let size = buffer.len() as u64;
        Self {
            buffer,
            original_name: original_name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// 上传结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFileMetadata {
    /// 公网访问地址
    pub url: String,
    /// 对象存储中的键，格式 `{folder}/{毫秒时间戳}-{随机后缀}.{扩展名}`
    pub key: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
}
