use std::sync::Arc;

use futures::future::try_join_all;
use rand::Rng;

use crate::{
    error::{AppError, AppResult},
    models::{UploadFile, UploadedFileMetadata},
    storage::Storage,
};

/// 未指定目录时使用的键前缀
pub const DEFAULT_FOLDER: &str = "uploads";

const SUFFIX_LEN: usize = 13;
const SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 文件上传服务
#[derive(Clone)]
pub struct UploadService {
    storage: Arc<dyn Storage>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 上传单个文件，返回公网地址与对象键
    pub async fn upload_file(
        &self,
        file: UploadFile,
        folder: Option<&str>,
    ) -> AppResult<UploadedFileMetadata> {
        let folder = folder.unwrap_or(DEFAULT_FOLDER);
        let timestamp = chrono::Utc::now().timestamp_millis();
        let key = {
            let mut rng = rand::rng();
            generate_object_key(folder, &file.original_name, timestamp, &mut rng)
        };

        self.storage
            .put_public(&key, file.buffer, &file.mime_type)
            .await?;

        tracing::debug!(
            "文件已上传: {} -> {} ({} 字节)",
            file.original_name,
            key,
            file.size
        );

        Ok(UploadedFileMetadata {
            url: self.storage.public_url(&key),
            key,
            original_name: file.original_name,
            mime_type: file.mime_type,
            size: file.size,
        })
    }

    /// 并发上传多个文件
    ///
    /// 所有上传在等待任何结果之前就已全部派发；任意一个失败则整体失败，
    /// 其余仍在进行的上传不会被取消。成功时结果顺序与输入一致。
    pub async fn upload_multiple_files(
        &self,
        files: Vec<UploadFile>,
        folder: Option<&str>,
    ) -> AppResult<Vec<UploadedFileMetadata>> {
        let folder = folder.unwrap_or(DEFAULT_FOLDER).to_string();

        let handles: Vec<_> = files
            .into_iter()
            .map(|file| {
                let service = self.clone();
                let folder = folder.clone();
                tokio::spawn(async move { service.upload_file(file, Some(&folder)).await })
            })
            .collect();

        // JoinHandle 被丢弃时任务继续在后台运行
        try_join_all(handles.into_iter().map(|handle| async move {
            match handle.await {
                Ok(result) => result,
                Err(e) => Err(AppError::Internal(anyhow::anyhow!("上传任务异常退出: {}", e))),
            }
        }))
        .await
    }
}

/// 提取文件扩展名：最后一个 `.` 之后的部分；没有 `.` 时返回整个文件名
pub fn file_extension(original_name: &str) -> &str {
    original_name.rsplit('.').next().unwrap_or(original_name)
}

/// 生成对象键 `{folder}/{timestamp}-{suffix}.{extension}`
pub fn generate_object_key<R: Rng + ?Sized>(
    folder: &str,
    original_name: &str,
    timestamp_millis: i64,
    rng: &mut R,
) -> String {
    format!(
        "{}/{}-{}.{}",
        folder,
        timestamp_millis,
        random_suffix(rng),
        file_extension(original_name)
    )
}

fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}
