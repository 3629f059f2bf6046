use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 统一API响应格式，`data` 缺省时序列化为 null
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// 业务响应码
    pub code: i32,
    pub msg: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::success_with_message(data, "操作成功")
    }

    pub fn success_with_message(data: T, msg: impl Into<String>) -> Self {
        Self {
            code: ResponseCode::SUCCESS,
            msg: msg.into(),
            data: Some(data),
        }
    }

    /// 错误响应附带诊断数据（健康检查使用）
    pub fn error_with_data(code: i32, msg: impl Into<String>, data: T) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (ResponseCode::http_status(self.code), Json(self)).into_response()
    }
}

/// 业务响应码
pub struct ResponseCode;

impl ResponseCode {
    pub const SUCCESS: i32 = 200;

    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const FILE_TOO_LARGE: i32 = 413;

    pub const INTERNAL_ERROR: i32 = 500;
    pub const DATABASE_ERROR: i32 = 501;
    pub const STORAGE_ERROR: i32 = 502;
    pub const SERVICE_UNAVAILABLE: i32 = 503;

    /// 业务码到HTTP状态码；数据库与存储错误对外统一为 500
    pub fn http_status(code: i32) -> StatusCode {
        match code {
            Self::SUCCESS => StatusCode::OK,
            Self::BAD_REQUEST => StatusCode::BAD_REQUEST,
            Self::NOT_FOUND => StatusCode::NOT_FOUND,
            Self::FILE_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            Self::SERVICE_UNAVAILABLE => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_data_serializes_as_null() {
        let value = serde_json::to_value(ApiResponse::success(None::<i32>)).unwrap();
        assert_eq!(value["code"], 200);
        assert_eq!(value["msg"], "操作成功");
        assert_eq!(value["data"], serde_json::Value::Null);

        let value = serde_json::to_value(ApiResponse::<()>::error(404, "资源不存在")).unwrap();
        assert_eq!(value["data"], serde_json::Value::Null);
    }

    #[test]
    fn test_http_status_for_business_codes() {
        assert_eq!(ResponseCode::http_status(400), StatusCode::BAD_REQUEST);
        assert_eq!(ResponseCode::http_status(413), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            ResponseCode::http_status(ResponseCode::DATABASE_ERROR),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ResponseCode::http_status(ResponseCode::STORAGE_ERROR),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
