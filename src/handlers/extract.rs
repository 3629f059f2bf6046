//! 请求提取器：提取失败时转换为 `AppError`，保证错误响应也使用统一格式

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Multipart, Path, Request,
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;

use crate::{error::AppError, handlers::AppState};

/// JSON 请求体
pub struct ApiJson<T>(pub T);

impl<T> FromRequest<AppState> for ApiJson<T>
where
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection, state.config.file.max_size)),
        }
    }
}

/// 路径参数
pub struct ApiPath<T>(pub T);

impl<T> FromRequestParts<AppState> for ApiPath<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|e: PathRejection| {
                AppError::bad_request(format!("路径参数无效: {}", e.body_text()))
            })
    }
}

/// multipart/form-data 请求体
pub struct ApiMultipart(pub Multipart);

impl FromRequest<AppState> for ApiMultipart {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        Multipart::from_request(req, state)
            .await
            .map(Self)
            .map_err(|e: MultipartRejection| {
                AppError::bad_request(format!("无效的表单请求: {}", e.body_text()))
            })
    }
}

fn json_rejection(rejection: JsonRejection, max_size: u64) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            AppError::validation(format!("请求字段无效: {}", e.body_text()))
        }
        other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::file_too_large(max_size)
        }
        other => AppError::bad_request(format!("请求体不是有效的JSON: {}", other.body_text())),
    }
}
