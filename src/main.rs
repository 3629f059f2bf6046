use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use website_backend::{
    config::Config,
    database::Database,
    error::AppResult,
    handlers::AppState,
    routes::create_app,
    services::{ContentServices, UploadService},
    storage::S3Storage,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "website_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置（启动时只读取一次）
    let config = Config::from_env()?;
    tracing::info!(
        "应用: {} ({})，监听地址: {}",
        config.app.name,
        config.app.env,
        config.server_addr()
    );
    tracing::info!("日志聚合地址: {}", config.app.grafana_url);

    // 初始化数据库（如果连接失败则继续启动，但记录警告）
    let database = match Database::new(&config.database).await {
        Ok(db) => Some(db),
        Err(e) => {
            tracing::warn!("数据库连接失败，服务将在无数据库模式下启动: {}", e);
            None
        }
    };

    // 初始化S3存储（未配置bucket时上传功能不可用）
    let storage = match S3Storage::new(&config.s3).await {
        Ok(storage) => {
            tracing::info!(
                "S3存储已就绪: bucket={}, region={}",
                storage.bucket(),
                config.s3.region
            );
            Some(storage)
        }
        Err(e) => {
            tracing::warn!("S3存储初始化失败，上传服务将不可用: {}", e);
            None
        }
    };

    // 创建应用状态
    let app_state = AppState {
        content: database.as_ref().map(ContentServices::from_database),
        uploads: storage
            .clone()
            .map(|storage| UploadService::new(Arc::new(storage))),
        database: database.clone(),
        storage,
        config: config.clone(),
    };

    let app = create_app(app_state);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(&config.server_addr()).await?;
    tracing::info!("🚀 服务器启动成功，监听地址: {}", config.server_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = database {
        db.close().await;
    }

    tracing::info!("服务器已停止");
    Ok(())
}

/// 等待 Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("监听 Ctrl-C 失败: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("监听 SIGTERM 失败: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("收到停止信号，正在关闭服务器...");
}
