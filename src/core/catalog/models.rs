//! 视频与资料清单的数据模型

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static KLAUSUR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)klausur").expect("valid pattern"));
static ASSIGNMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)arbeitsblätter|aufgaben").expect("valid pattern")
});

/// 视频条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub subject: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// 资料中的单个链接
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLink {
    pub title: String,
    pub url: String,
}

/// 资料条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub subject: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub links: Option<Vec<MaterialLink>>,
    #[serde(default)]
    pub modal_cta: Option<String>,
    /// 弹窗中链接的排版，`cards` 为大卡片，其余为普通列表
    #[serde(default)]
    pub modal_variant: Option<String>,
}

/// 资料分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Klausur,
    Assignment,
    LearningProduct,
}

impl Material {
    /// 按 `type` 字段分类
    pub fn classify(&self) -> MaterialKind {
        if self.is_klausur() {
            MaterialKind::Klausur
        } else if self.is_assignment() {
            MaterialKind::Assignment
        } else {
            MaterialKind::LearningProduct
        }
    }

    pub fn is_klausur(&self) -> bool {
        KLAUSUR_PATTERN.is_match(&self.kind)
    }

    pub fn is_assignment(&self) -> bool {
        ASSIGNMENT_PATTERN.is_match(&self.kind)
    }

    /// 链接列表，`null` 与缺省都视为空
    pub fn links(&self) -> &[MaterialLink] {
        self.links.as_deref().unwrap_or_default()
    }

    pub fn uses_card_links(&self) -> bool {
        self.modal_variant.as_deref() == Some("cards")
    }
}

/// 同时加载完成的两份清单
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub videos: Vec<Video>,
    pub materials: Vec<Material>,
}

impl Catalog {
    /// 某一科目的视频（取第一个）
    pub fn video_for(&self, subject: &str) -> Option<&Video> {
        self.videos.iter().find(|video| video.subject == subject)
    }

    /// 某一科目的资料，附带在完整清单中的下标
    pub fn materials_for<'a>(
        &'a self,
        subject: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Material)> + 'a {
        self.materials
            .iter()
            .enumerate()
            .filter(move |(_, material)| material.subject == subject)
    }
}
