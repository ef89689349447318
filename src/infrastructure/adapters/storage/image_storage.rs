//! Image Storage - 文件系统图片存储实现
//!
//! 实现 ImageStoragePort trait。文件名取原名去掉扩展名后的 md5，再拼回扩展名。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{ImageStorageError, ImageStoragePort, StoredImage};

/// 图片存储配置
#[derive(Debug, Clone)]
pub struct ImageStorageConfig {
    /// 运行时根目录
    pub runtime_root: PathBuf,
    /// 相对根目录的保存路径，以 `/` 结尾
    pub save_path: String,
    /// 对外访问前缀
    pub prefix_url: String,
    /// 最大字节数
    pub max_size: usize,
    /// 允许的扩展名（含点号，小写）
    pub allow_exts: Vec<String>,
}

/// 文件系统图片存储
pub struct FileImageStorage {
    config: ImageStorageConfig,
}

impl FileImageStorage {
    pub fn new(mut config: ImageStorageConfig) -> Self {
        config.allow_exts = config
            .allow_exts
            .iter()
            .map(|e| e.to_lowercase())
            .collect();
        Self { config }
    }

    /// 图片保存目录，同时作为静态文件目录
    pub fn image_dir(&self) -> PathBuf {
        self.config.runtime_root.join(&self.config.save_path)
    }

    /// 生成保存用的文件名
    pub fn image_name(file_name: &str) -> String {
        let ext = extension_of(file_name);
        let stem = file_name.strip_suffix(ext.as_str()).unwrap_or(file_name);
        format!("{:x}{}", md5::compute(stem.as_bytes()), ext)
    }
}

/// 带点号的扩展名，没有扩展名时为空串
fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default()
}

#[async_trait]
impl ImageStoragePort for FileImageStorage {
    fn check(&self, file_name: &str, size: usize) -> Result<(), ImageStorageError> {
        let ext = extension_of(file_name).to_lowercase();
        if !self.config.allow_exts.contains(&ext) {
            return Err(ImageStorageError::UnsupportedExtension(ext));
        }
        if size > self.config.max_size {
            return Err(ImageStorageError::TooLarge {
                size,
                max: self.config.max_size,
            });
        }
        Ok(())
    }

    async fn ensure_dir(&self) -> Result<(), ImageStorageError> {
        let dir = self.image_dir();

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| ImageStorageError::DirectoryUnavailable(e.to_string()))?;

        let metadata = fs::metadata(&dir)
            .await
            .map_err(|e| ImageStorageError::DirectoryUnavailable(e.to_string()))?;

        if metadata.permissions().readonly() {
            return Err(ImageStorageError::DirectoryUnavailable(format!(
                "permission denied: {}",
                dir.display()
            )));
        }
        Ok(())
    }

    async fn save(&self, file_name: &str, data: &[u8]) -> Result<StoredImage, ImageStorageError> {
        let name = Self::image_name(file_name);
        let path = self.image_dir().join(&name);

        fs::write(&path, data)
            .await
            .map_err(|e| ImageStorageError::SaveFailed(e.to_string()))?;

        tracing::debug!(path = %path.display(), size = data.len(), "Image saved");

        Ok(StoredImage {
            url: format!(
                "{}/{}{}",
                self.config.prefix_url.trim_end_matches('/'),
                self.config.save_path,
                name
            ),
            save_path: format!("{}{}", self.config.save_path, name),
        })
    }
}
