//! TOML 配置
//!
//! 默认位置：`~/.config/lk-portal/config.toml`，文件不存在时使用默认值。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::error::types::{PortalError, Result};

/// Pill 布局配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillSettings {
    /// 相邻 pill 之间的间距
    pub gap: f64,
    /// pill 内边距下限
    pub min_padding: f64,
    /// 翻页控件上显示的文字
    pub control_label: String,
}

impl Default for PillSettings {
    fn default() -> Self {
        Self {
            gap: 1.0,
            min_padding: 1.0,
            control_label: "...".to_string(),
        }
    }
}

/// 资料目录配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// 相对路径的解析基准
    pub site_root: PathBuf,
    pub videos: String,
    pub materials: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            videos: "data/videos.json".to_string(),
            materials: "data/materials.json".to_string(),
        }
    }
}

/// 成绩图表范围
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeSettings {
    pub min: f64,
    pub max: f64,
}

impl Default for GradeSettings {
    fn default() -> Self {
        Self { min: 7.7, max: 10.0 }
    }
}

/// 输入配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// 同一按键的防抖间隔（毫秒）
    pub debounce_ms: u64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self { debounce_ms: 150 }
    }
}

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pills: PillSettings,
    pub catalog: CatalogSettings,
    pub grades: GradeSettings,
    pub input: InputSettings,
}

impl Settings {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("lk-portal").join("config.toml"))
    }

    /// 从指定路径加载；未指定时尝试默认路径，文件不存在则返回默认值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path)?;
        let settings = Self::from_toml(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(settings)
    }

    /// 解析 TOML 文本
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)
            .map_err(|e| PortalError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.pills.gap < 0.0 || self.pills.min_padding < 0.0 {
            return Err(PortalError::Config(
                "pill gap and min_padding must not be negative".to_string(),
            )
            .into());
        }
        if self.grades.min >= self.grades.max {
            return Err(PortalError::Config(format!(
                "grade range is empty: {} >= {}",
                self.grades.min, self.grades.max
            ))
            .into());
        }
        Ok(())
    }
}
