use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use std::collections::HashMap;

use crate::{
    handlers::AppState,
    response::{ApiResponse, ResponseCode},
};

#[derive(Deserialize)]
pub struct HealthQuery {
    #[serde(default)]
    detail: bool,
}

/// 健康检查处理器
pub async fn health_check(
    Query(params): Query<HealthQuery>,
) -> Json<ApiResponse<serde_json::Value>> {
    if params.detail {
        let timestamp = chrono::Utc::now().to_rfc3339();
        let mut details = HashMap::new();
        details.insert("status", "healthy");
        details.insert("version", env!("CARGO_PKG_VERSION"));
        details.insert("timestamp", timestamp.as_str());

        Json(ApiResponse::success(serde_json::json!(details)))
    } else {
        Json(ApiResponse::success(serde_json::json!({"status": "ok"})))
    }
}

/// 系统信息处理器
pub async fn system_info(
    State(app_state): State<AppState>,
) -> Json<ApiResponse<HashMap<&'static str, serde_json::Value>>> {
    let mut info = HashMap::new();
    info.insert("name", serde_json::json!(app_state.config.app.name));
    info.insert("env", serde_json::json!(app_state.config.app.env));
    info.insert("version", serde_json::json!(env!("CARGO_PKG_VERSION")));
    info.insert(
        "database",
        serde_json::json!(availability(app_state.content.is_some())),
    );
    info.insert(
        "storage",
        serde_json::json!(availability(app_state.uploads.is_some())),
    );

    Json(ApiResponse::success(info))
}

fn availability(available: bool) -> &'static str {
    if available { "available" } else { "unavailable" }
}

/// 数据库健康检查处理器
pub async fn db_health_check(
    State(app_state): State<AppState>,
) -> ApiResponse<serde_json::Value> {
    match &app_state.database {
        Some(db) => match db.health_check().await {
            Ok(true) => healthy("database"),
            Ok(false) => ApiResponse::error_with_data(
                ResponseCode::SERVICE_UNAVAILABLE,
                "数据库连接异常".to_string(),
                serde_json::json!({"status": "unhealthy"}),
            ),
            Err(e) => {
                tracing::error!("数据库健康检查失败: {}", e);
                ApiResponse::error_with_data(
                    ResponseCode::SERVICE_UNAVAILABLE,
                    format!("数据库健康检查失败: {}", e),
                    serde_json::json!({"status": "error"}),
                )
            }
        },
        None => ApiResponse::error_with_data(
            ResponseCode::SERVICE_UNAVAILABLE,
            "数据库未配置或连接失败".to_string(),
            serde_json::json!({"status": "unavailable"}),
        ),
    }
}

/// 存储健康检查处理器
pub async fn storage_health_check(
    State(app_state): State<AppState>,
) -> ApiResponse<serde_json::Value> {
    match &app_state.storage {
        Some(storage) => match storage.health_check().await {
            Ok(true) => healthy("storage"),
            Ok(false) => ApiResponse::error_with_data(
                ResponseCode::SERVICE_UNAVAILABLE,
                "存储服务连接异常".to_string(),
                serde_json::json!({"status": "unhealthy", "bucket": storage.bucket()}),
            ),
            Err(e) => {
                tracing::error!("存储健康检查失败: {}", e);
                ApiResponse::error_with_data(
                    ResponseCode::SERVICE_UNAVAILABLE,
                    format!("存储健康检查失败: {}", e),
                    serde_json::json!({"status": "error"}),
                )
            }
        },
        None => ApiResponse::error_with_data(
            ResponseCode::SERVICE_UNAVAILABLE,
            "存储服务未配置或连接失败".to_string(),
            serde_json::json!({"status": "unavailable"}),
        ),
    }
}

fn healthy(component: &str) -> ApiResponse<serde_json::Value> {
    let mut details = serde_json::Map::new();
    details.insert(component.to_string(), "healthy".into());
    details.insert("timestamp".to_string(), chrono::Utc::now().to_rfc3339().into());
    ApiResponse::success(serde_json::Value::Object(details))
}
