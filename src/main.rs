//! Inkpad - 文章 / 标签 JSON API 服务
//!
//! 启动流程：加载配置 → 初始化日志 → 数据库与迁移 → 组装服务 → 启动 HTTP 服务器

use std::sync::Arc;
use std::time::Duration;

use inkpad::auth::{AppCredentials, TokenService};
use inkpad::config::{load_config, print_config, AppConfig};
use inkpad::infrastructure::adapters::{FileImageStorage, ImageStorageConfig};
use inkpad::infrastructure::http::{AppState, HttpServer, ServerConfig};
use inkpad::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};
use inkpad::infrastructure::persistence::{SqliteArticleRepository, SqliteTagRepository};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Inkpad - 文章 / 标签 JSON API");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let article_repo = Arc::new(SqliteArticleRepository::new(pool.clone()));
    let tag_repo = Arc::new(SqliteTagRepository::new(pool));

    // 图片存储
    let image_storage = FileImageStorage::new(ImageStorageConfig {
        runtime_root: config.upload.runtime_root_path.clone(),
        save_path: config.upload.image_save_path.clone(),
        prefix_url: config.upload.image_prefix_url.clone(),
        max_size: config.upload.image_max_size_bytes(),
        allow_exts: config.upload.image_allow_exts.clone(),
    });
    let image_dir = image_storage.image_dir();
    tokio::fs::create_dir_all(&image_dir).await?;

    // 鉴权
    let tokens = TokenService::new(
        &config.app.jwt_secret,
        config.app.jwt_issuer.clone(),
        chrono::Duration::seconds(i64::try_from(config.app.token_ttl_secs)?),
    );
    let credentials = AppCredentials::new(&config.app.app_key, &config.app.app_secret);

    let state = AppState::new(
        article_repo,
        tag_repo,
        Arc::new(image_storage),
        image_dir,
        tokens,
        credentials,
        config.app.page_size,
    );

    // 请求体上限留出 multipart 头部的余量
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_request_timeout(Duration::from_secs(config.server.request_timeout_secs))
        .with_body_limit(config.upload.image_max_size_bytes() + 64 * 1024);

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，`RUST_LOG` 优先于配置中的日志级别
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},inkpad={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
