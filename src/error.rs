/// Error types for the homework helper
///
/// UI-facing errors derive `Clone` because they travel inside iced
/// messages. Their `Display` text is what the user sees.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single submission (transport or client side)
///
/// Domain errors reported by the backend (`other_error`) are not represented
/// here: they arrive inside a successfully parsed result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The server answered with a non-success status
    #[error("HTTP错误! 状态码: {status}")]
    Status { status: u16 },

    /// No response within the configured timeout
    #[error("请求超时 ({secs} 秒)")]
    Timeout { secs: u64 },

    /// Connection refused, DNS failure, broken body stream...
    #[error("网络错误: {0}")]
    Network(String),

    /// Body was not the expected JSON shape
    #[error("响应解析失败: {0}")]
    Parse(String),
}

/// Failure while loading the image the user picked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("无法读取文件 {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("不是有效的图片文件: {0}")]
    NotAnImage(String),
}

/// Failure while loading settings from disk
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_code() {
        let err = SubmitError::Status { status: 500 };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_image_error_mentions_path() {
        let err = ImageError::Read {
            path: PathBuf::from("/tmp/missing.png"),
            message: "No such file".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("/tmp/missing.png"));
        assert!(text.contains("No such file"));
    }
}
