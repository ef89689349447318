//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 业务配置（分页、鉴权）
    #[serde(default)]
    pub app: AppSettings,

    /// 图片上传配置
    #[serde(default)]
    pub upload: UploadConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 单个请求超时时间（秒）
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 业务配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// 列表接口每页条数
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Token 签名密钥
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Token 签发者
    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,

    /// Token 有效期（秒）
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// 允许换取 Token 的应用凭证
    #[serde(default = "default_app_key")]
    pub app_key: String,

    #[serde(default = "default_app_secret")]
    pub app_secret: String,
}

fn default_page_size() -> u32 {
    10
}

fn default_jwt_secret() -> String {
    "inkpad-dev-secret".to_string()
}

fn default_jwt_issuer() -> String {
    "inkpad".to_string()
}

fn default_token_ttl() -> u64 {
    3 * 60 * 60 // 3 小时
}

fn default_app_key() -> String {
    "inkpad".to_string()
}

fn default_app_secret() -> String {
    "inkpad-dev-app-secret".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            jwt_secret: default_jwt_secret(),
            jwt_issuer: default_jwt_issuer(),
            token_ttl_secs: default_token_ttl(),
            app_key: default_app_key(),
            app_secret: default_app_secret(),
        }
    }
}

/// 图片上传配置
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// 运行时根目录
    #[serde(default = "default_runtime_root")]
    pub runtime_root_path: PathBuf,

    /// 图片保存的相对路径（相对于运行时根目录）
    #[serde(default = "default_image_save_path")]
    pub image_save_path: String,

    /// 图片访问 URL 前缀
    #[serde(default = "default_image_prefix_url")]
    pub image_prefix_url: String,

    /// 单张图片大小上限（MB）
    #[serde(default = "default_image_max_size")]
    pub image_max_size_mb: usize,

    /// 允许的扩展名（含点号）
    #[serde(default = "default_image_allow_exts")]
    pub image_allow_exts: Vec<String>,
}

fn default_runtime_root() -> PathBuf {
    PathBuf::from("runtime")
}

fn default_image_save_path() -> String {
    "upload/images/".to_string()
}

fn default_image_prefix_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_image_max_size() -> usize {
    5
}

fn default_image_allow_exts() -> Vec<String> {
    vec![".jpg".to_string(), ".jpeg".to_string(), ".png".to_string()]
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            runtime_root_path: default_runtime_root(),
            image_save_path: default_image_save_path(),
            image_prefix_url: default_image_prefix_url(),
            image_max_size_mb: default_image_max_size(),
            image_allow_exts: default_image_allow_exts(),
        }
    }
}

impl UploadConfig {
    /// 单张图片大小上限（字节）
    pub fn image_max_size_bytes(&self) -> usize {
        self.image_max_size_mb.saturating_mul(1024 * 1024)
    }

    /// 图片实际保存目录
    pub fn image_dir(&self) -> PathBuf {
        self.runtime_root_path.join(&self.image_save_path)
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库文件路径
    #[serde(default = "default_db_path")]
    pub path: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "data/inkpad.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// 获取数据库 URL
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
