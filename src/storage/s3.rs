use super::Storage;
use crate::{
    config::S3Config,
    error::{AppError, AppResult},
};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{Client, config::Credentials, primitives::ByteStream, types::ObjectCannedAcl};
use bytes::Bytes;
use std::sync::Arc;

/// AWS S3存储实现
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: Arc<Client>,
    bucket: String,
    region: String,
}

impl S3Storage {
    /// 创建新的S3存储实例
    pub async fn new(config: &S3Config) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::config("AWS_S3_BUCKET_NAME 未配置"));
        }

        let region = Region::new(config.region.clone());

        let client = if config.has_static_credentials() {
            let credentials = Credentials::new(
                &config.access_key_id,
                &config.secret_access_key,
                None,     // session token
                None,     // expiration
                "static", // provider name
            );

            let s3_config = aws_sdk_s3::Config::builder()
                .credentials_provider(credentials)
                .region(region)
                .behavior_version(BehaviorVersion::latest())
                .build();

            Client::from_conf(s3_config)
        } else {
            tracing::info!("未配置静态AWS密钥，使用默认凭证链");
            let shared_config = aws_config::defaults(BehaviorVersion::latest())
                .region(region)
                .load()
                .await;

            Client::new(&shared_config)
        };

        Ok(Self {
            client: Arc::new(client),
            bucket: config.bucket.clone(),
            region: config.region.clone(),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// 健康检查
    pub async fn health_check(&self) -> AppResult<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::error!("S3健康检查失败: {}", e);
                Ok(false)
            }
        }
    }
}

/// `https://{bucket}.s3.{region}.amazonaws.com/{key}`
pub fn public_object_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
}

#[async_trait::async_trait]
impl Storage for S3Storage {
    async fn put_public(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()> {
        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("上传文件失败: {}", e.into_service_error())))?;

        tracing::info!(
            "成功上传文件到S3: {}/{}, ETag: {}",
            self.bucket,
            key,
            result.e_tag().unwrap_or("")
        );

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        public_object_url(&self.bucket, &self.region, key)
    }
}
