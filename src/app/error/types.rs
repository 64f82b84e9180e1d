//! 错误类型定义

use thiserror::Error;

/// LK 门户错误类型
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unknown overview page: {0}")]
    UnknownOverview(String),
}

/// 应用程序通用结果类型
pub type Result<T> = anyhow::Result<T>;
