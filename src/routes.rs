use crate::docs::ApiDoc;
use crate::handlers::{
    AppState, db_health_check, get_about_company, get_banner, get_basic_company_info,
    get_contact_us, get_user, health_check, storage_health_check, system_info,
    update_about_company, update_banner, update_basic_company_info, update_contact_us,
    update_user, upload_file, upload_multiple_files,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::Method,
    response::Json,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

/// 创建API路由
pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        // 站点内容（单例记录）
        .route("/banners", get(get_banner).put(update_banner))
        .route(
            "/basic-company-info",
            get(get_basic_company_info).put(update_basic_company_info),
        )
        .route(
            "/about-companies",
            get(get_about_company).put(update_about_company),
        )
        .route("/contact-us", get(get_contact_us).put(update_contact_us))
        // 用户
        .route("/users/{id}", get(get_user).put(update_user))
        // 文件上传
        .route("/upload", post(upload_file))
        .route("/upload/multiple", post(upload_multiple_files))
}

/// 组装完整应用：业务路由、健康检查、文档与中间件
pub fn create_app(app_state: AppState) -> Router {
    let max_body_size = app_state.config.file.max_size as usize;
    let expose_docs = !app_state.config.is_production();

    // 创建CORS中间件
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let mut router = Router::new()
        // 健康检查和系统信息
        .route("/health", get(health_check))
        .route("/api/system/info", get(system_info))
        .route("/api/health/db", get(db_health_check))
        .route("/api/health/storage", get(storage_health_check))
        .merge(create_api_routes());

    if expose_docs {
        router = router.route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );
    }

    router
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(max_body_size)) // 设置请求体大小限制
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
