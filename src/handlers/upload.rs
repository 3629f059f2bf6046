use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    handlers::{AppState, extract::ApiMultipart},
    models::{UploadFile, UploadedFileMetadata},
    response::ApiResponse,
};

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// 上传表单（multipart/form-data）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadForm {
    /// 单文件上传字段
    #[schema(value_type = Option<String>, format = Binary)]
    pub file: Option<String>,
    /// 多文件上传字段，可重复
    pub files: Option<Vec<String>>,
    /// 对象键前缀，默认 "uploads"
    pub folder: Option<String>,
}

/// 解析后的上传请求
struct ParsedUpload {
    files: Vec<UploadFile>,
    folder: Option<String>,
}

/// 上传单个文件
///
/// 表单字段 `file` 为文件内容，可选字段 `folder` 指定对象键前缀。
#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "上传成功", body = ApiResponse<UploadedFileMetadata>),
        (status = 400, description = "缺少文件、文件多于一个或表单格式错误"),
        (status = 413, description = "请求体超过大小限制"),
        (status = 500, description = "存储服务错误")
    ),
    tag = "文件上传"
)]
pub async fn upload_file(
    State(app_state): State<AppState>,
    ApiMultipart(multipart): ApiMultipart,
) -> Result<Json<ApiResponse<UploadedFileMetadata>>, AppError> {
    let uploads = app_state.uploads()?;
    let parsed = read_upload_form(multipart, app_state.config.file.max_size).await?;

    let mut files = parsed.files;
    let file = match files.len() {
        0 => return Err(AppError::bad_request("缺少文件数据")),
        1 => files.remove(0),
        n => {
            return Err(AppError::bad_request(format!(
                "单文件上传只接受一个文件，收到 {} 个；多文件请使用 /upload/multiple",
                n
            )));
        }
    };

    let metadata = uploads.upload_file(file, parsed.folder.as_deref()).await?;

    tracing::info!(
        "成功上传文件: {} -> {} (大小: {} 字节)",
        metadata.original_name,
        metadata.key,
        metadata.size
    );

    Ok(Json(ApiResponse::success(metadata)))
}

/// 批量上传文件
#[utoipa::path(
    post,
    path = "/upload/multiple",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "全部上传成功", body = ApiResponse<Vec<UploadedFileMetadata>>),
        (status = 400, description = "缺少文件或表单格式错误"),
        (status = 413, description = "请求体超过大小限制"),
        (status = 500, description = "任一文件上传失败")
    ),
    tag = "文件上传"
)]
pub async fn upload_multiple_files(
    State(app_state): State<AppState>,
    ApiMultipart(multipart): ApiMultipart,
) -> Result<Json<ApiResponse<Vec<UploadedFileMetadata>>>, AppError> {
    let uploads = app_state.uploads()?;
    let parsed = read_upload_form(multipart, app_state.config.file.max_size).await?;

    if parsed.files.is_empty() {
        return Err(AppError::bad_request("缺少文件数据"));
    }

    let results = uploads
        .upload_multiple_files(parsed.files, parsed.folder.as_deref())
        .await?;

    let count = results.len();
    tracing::info!("成功批量上传 {} 个文件", count);

    Ok(Json(ApiResponse::success_with_message(
        results,
        format!("成功上传 {} 个文件", count),
    )))
}

/// 读取 multipart 表单中的文件与目录字段
async fn read_upload_form(mut multipart: Multipart, max_size: u64) -> AppResult<ParsedUpload> {
    let mut files = Vec::new();
    let mut folder = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_size))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" | "files" => {
                let original_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .ok_or_else(|| AppError::bad_request("缺少文件名"))?;
                let declared_type = field.content_type().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, max_size))?;

                let mime_type = declared_type.unwrap_or_else(|| sniff_mime_type(&data));
                files.push(UploadFile::new(data, original_name, mime_type));
            }
            "folder" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::bad_request(format!("读取目录字段失败: {}", e)))?;
                let value = value.trim().trim_matches('/').to_string();
                if !value.is_empty() {
                    folder = Some(value);
                }
            }
            _ => {
                // 忽略未知字段
            }
        }
    }

    Ok(ParsedUpload { files, folder })
}

/// 未声明类型时根据文件内容推断
fn sniff_mime_type(data: &Bytes) -> String {
    infer::get(data)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string())
}

fn multipart_error(e: MultipartError, max_size: u64) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::file_too_large(max_size)
    } else {
        AppError::bad_request(format!("文件上传格式不正确: {}", e.body_text()))
    }
}
