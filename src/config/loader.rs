//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `INKPAD_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `INKPAD_SERVER__PORT=8080`
/// - `INKPAD_APP__JWT_SECRET=change-me`
/// - `INKPAD_UPLOAD__IMAGE_ALLOW_EXTS=.jpg,.png`
/// - `INKPAD_DATABASE__PATH=/data/inkpad.db`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", defaults.server.host.as_str())?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default(
            "server.request_timeout_secs",
            defaults.server.request_timeout_secs as i64,
        )?
        .set_default("app.page_size", i64::from(defaults.app.page_size))?
        .set_default("app.jwt_secret", defaults.app.jwt_secret.as_str())?
        .set_default("app.jwt_issuer", defaults.app.jwt_issuer.as_str())?
        .set_default("app.token_ttl_secs", defaults.app.token_ttl_secs as i64)?
        .set_default("app.app_key", defaults.app.app_key.as_str())?
        .set_default("app.app_secret", defaults.app.app_secret.as_str())?
        .set_default(
            "upload.runtime_root_path",
            defaults.upload.runtime_root_path.to_string_lossy().as_ref(),
        )?
        .set_default(
            "upload.image_save_path",
            defaults.upload.image_save_path.as_str(),
        )?
        .set_default(
            "upload.image_prefix_url",
            defaults.upload.image_prefix_url.as_str(),
        )?
        .set_default(
            "upload.image_max_size_mb",
            defaults.upload.image_max_size_mb as i64,
        )?
        .set_default(
            "upload.image_allow_exts",
            defaults.upload.image_allow_exts.clone(),
        )?
        .set_default("database.path", defaults.database.path.as_str())?
        .set_default("database.max_connections", i64::from(defaults.database.max_connections))?
        .set_default("log.level", defaults.log.level.as_str())?
        .set_default("log.json", defaults.log.json)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: INKPAD_APP__PAGE_SIZE=20
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("INKPAD")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("upload.image_allow_exts")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Token 有效期上限（365 天）
const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let invalid = |msg: &str| Err(ConfigError::ValidationError(msg.to_string()));

    if config.server.port == 0 {
        return invalid("Server port cannot be 0");
    }

    if config.server.request_timeout_secs == 0 {
        return invalid("Request timeout cannot be 0");
    }

    if config.app.page_size == 0 {
        return invalid("Page size cannot be 0");
    }

    // 没有密钥就无法签发 Token
    if config.app.jwt_secret.is_empty() {
        return invalid("JWT secret cannot be empty");
    }

    if config.app.token_ttl_secs == 0 {
        return invalid("Token TTL cannot be 0");
    }

    if config.app.token_ttl_secs > MAX_TOKEN_TTL_SECS {
        return invalid("Token TTL cannot exceed 365 days");
    }

    if config.app.app_key.is_empty() || config.app.app_secret.is_empty() {
        return invalid("App key and app secret cannot be empty");
    }

    if config.upload.image_max_size_mb == 0 {
        return invalid("Image max size cannot be 0");
    }

    if config.upload.image_allow_exts.is_empty() {
        return invalid("Allowed image extensions cannot be empty");
    }

    if let Some(ext) = config
        .upload
        .image_allow_exts
        .iter()
        .find(|ext| !ext.starts_with('.') || ext.len() < 2)
    {
        return Err(ConfigError::ValidationError(format!(
            "Image extension must look like \".png\", got {:?}",
            ext
        )));
    }

    if config.database.path.is_empty() {
        return invalid("Database path cannot be empty");
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），不输出密钥
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Request Timeout: {}s", config.server.request_timeout_secs);
    tracing::info!("Page Size: {}", config.app.page_size);
    tracing::info!("Token Issuer: {}", config.app.jwt_issuer);
    tracing::info!("Token TTL: {}s", config.app.token_ttl_secs);
    tracing::info!("App Key: {}", config.app.app_key);
    tracing::info!("Image Directory: {:?}", config.upload.image_dir());
    tracing::info!("Image Prefix URL: {}", config.upload.image_prefix_url);
    tracing::info!(
        "Image Limits: {}MB {:?}",
        config.upload.image_max_size_mb,
        config.upload.image_allow_exts
    );
    tracing::info!("Database: {}", config.database.path);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_secret() {
        let mut config = AppConfig::default();
        config.app.jwt_secret = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_unbounded_token_ttl() {
        let mut config = AppConfig::default();
        config.app.token_ttl_secs = MAX_TOKEN_TTL_SECS;
        assert!(validate_config(&config).is_ok());
        config.app.token_ttl_secs = u64::MAX;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_page_size() {
        let mut config = AppConfig::default();
        config.app.page_size = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_bare_extension() {
        let mut config = AppConfig::default();
        config.upload.image_allow_exts = vec!["png".to_string()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_path() {
        let mut config = AppConfig::default();
        config.database.path = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9100

[app]
page_size = 25
jwt_secret = "file-secret"

[upload]
image_allow_exts = [".png"]
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.app.page_size, 25);
        assert_eq!(config.app.jwt_secret, "file-secret");
        assert_eq!(config.upload.image_allow_exts, vec![".png".to_string()]);
        // 未覆盖的字段保持默认值
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.app.token_ttl_secs, 10800);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[app]\npage_size = 0").unwrap();

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
