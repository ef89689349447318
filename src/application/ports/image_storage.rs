//! Image Storage Port - 上传图片的存储抽象

use async_trait::async_trait;
use thiserror::Error;

/// 图片存储错误
#[derive(Debug, Error)]
pub enum ImageStorageError {
    #[error("Unsupported image extension: {0}")]
    UnsupportedExtension(String),

    #[error("Image too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Image directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Failed to save image: {0}")]
    SaveFailed(String),
}

/// 保存成功后的访问地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// 对外完整 URL
    pub url: String,
    /// 相对于运行目录的保存路径
    pub save_path: String,
}

/// Image Storage Port
#[async_trait]
pub trait ImageStoragePort: Send + Sync {
    /// 校验扩展名与大小；不合规时返回 UnsupportedExtension / TooLarge
    fn check(&self, file_name: &str, size: usize) -> Result<(), ImageStorageError>;

    /// 确认保存目录可用（不存在则创建）
    async fn ensure_dir(&self) -> Result<(), ImageStorageError>;

    /// 保存图片，文件名由存储实现决定
    async fn save(&self, file_name: &str, data: &[u8]) -> Result<StoredImage, ImageStorageError>;
}
