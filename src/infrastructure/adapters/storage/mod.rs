//! Storage Adapters

mod image_storage;

pub use image_storage::{FileImageStorage, ImageStorageConfig};
