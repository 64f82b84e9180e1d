//! 应用基础设施：错误、日志、配置

pub mod config;
pub mod error;
pub mod logging;
