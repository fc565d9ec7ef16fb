/// The problem image picked by the user
///
/// Files are read off the UI thread and sniffed with the `image` crate so
/// only real image files can be submitted.

use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ImageError;

/// Extensions offered by the file dialog
const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff"];

#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Filename only, sent along with the multipart part
    pub file_name: String,
    /// MIME type sniffed from the file content
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    /// Decoded lazily by iced when the preview is drawn
    pub preview: Handle,
}

impl UploadedImage {
    /// Wrap raw file content, rejecting anything that is not an image
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ImageError> {
        let file_name = file_name.into();
        let format = image::guess_format(&bytes)
            .map_err(|_| ImageError::NotAnImage(file_name.clone()))?;

        Ok(Self {
            file_name,
            mime: format.to_mime_type(),
            preview: Handle::from_bytes(bytes.clone()),
            bytes,
        })
    }

    /// Read an image file from disk
    pub async fn load(path: PathBuf) -> Result<Self, ImageError> {
        let bytes = tokio::fs::read(&path).await.map_err(|e| ImageError::Read {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let file_name = file_name_of(&path);
        let image = Self::from_bytes(file_name, bytes)?;
        info!("🖼️  Selected {} ({}, {} bytes)", image.file_name, image.mime, image.bytes.len());
        Ok(image)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Show the native file picker and load the chosen image
///
/// Returns `None` when the user cancels the dialog.
pub async fn pick_image() -> Option<Result<UploadedImage, ImageError>> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("选择题目图片")
        .add_filter("图片", &IMAGE_EXTENSIONS)
        .pick_file()
        .await;

    match handle {
        Some(file) => Some(UploadedImage::load(file.path().to_path_buf()).await),
        None => {
            debug!("File dialog cancelled");
            None
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string())
}
