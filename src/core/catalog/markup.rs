//! 清单标记生成：总览页与科目页

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

use super::links::with_hd_video_params;
use super::models::{Catalog, Material, MaterialKind, MaterialLink, Video};
use crate::app::error::types::PortalError;

static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid pattern"));

pub const OVERVIEW_FALLBACK: &str =
    r#"<p class="desc">Inhalte werden später ergänzt.</p>"#;
pub const VIDEO_PLACEHOLDER: &str =
    r#"<p class="desc">Video-Platzhalter wird später ergänzt.</p>"#;
const VIDEO_PENDING: &str = "Video folgt.";
const IFRAME_ALLOW: &str = "accelerometer; autoplay; clipboard-write; \
                            encrypted-media; gyroscope; picture-in-picture";

/// 转义文本与属性值
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// 科目名转为 id 片段：小写，非字母数字的连续字符替换为 `-`
pub fn subject_slug(subject: &str) -> String {
    if subject.is_empty() {
        return "subject".to_string();
    }
    SLUG_SEPARATORS
        .replace_all(&subject.to_lowercase(), "-")
        .into_owned()
}

/// 资料弹窗的 id
pub fn modal_id(subject: &str, index: usize) -> String {
    format!("material-modal-{}-{index}", subject_slug(subject))
}

fn video_frame(url: &str, title: &str) -> String {
    format!(
        r#"<div class="framed-video"><iframe src="{}" title="{}" allow="{IFRAME_ALLOW}" allowfullscreen loading="lazy"></iframe></div>"#,
        escape_html(&with_hd_video_params(url)),
        escape_html(title),
    )
}

fn description_or_pending(video: &Video) -> String {
    let text = video
        .description
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or(VIDEO_PENDING);
    format!(r#"<p class="desc">{}</p>"#, escape_html(text))
}

fn modal_link(link: &MaterialLink, class: &str) -> String {
    format!(
        r#"<a class="{class}" href="{}" target="_blank" rel="noopener"><span>{}</span><span class="subject-modal__cta">Öffnen</span></a>"#,
        escape_html(&link.url),
        escape_html(&link.title),
    )
}

/// 总览页类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewKind {
    Videos,
    Klausuren,
    Abs,
}

impl FromStr for OverviewKind {
    type Err = PortalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "videos" => Ok(OverviewKind::Videos),
            "klausuren" => Ok(OverviewKind::Klausuren),
            "abs" => Ok(OverviewKind::Abs),
            other => Err(PortalError::UnknownOverview(other.to_string())),
        }
    }
}

/// 生成总览页内容
pub fn render_overview(kind: OverviewKind, catalog: &Catalog) -> String {
    match kind {
        OverviewKind::Videos => render_video_overview(&catalog.videos),
        OverviewKind::Klausuren => {
            render_materials_by_subject(&catalog.materials, Material::is_klausur)
        }
        OverviewKind::Abs => {
            render_materials_by_subject(&catalog.materials, Material::is_assignment)
        }
    }
}

fn render_video_overview(videos: &[Video]) -> String {
    let markup: String = videos
        .iter()
        .map(|video| {
            let body = match video.url.as_deref() {
                Some(url) if !url.is_empty() => {
                    let description = video
                        .description
                        .as_deref()
                        .filter(|text| !text.is_empty())
                        .map(|text| format!("<p>{}</p>", escape_html(text)))
                        .unwrap_or_default();
                    format!("{}{description}", video_frame(url, &video.title))
                }
                _ => description_or_pending(video),
            };
            format!(
                r#"<article class="overview-modal__video"><h3>{}</h3>{body}</article>"#,
                escape_html(&video.subject)
            )
        })
        .collect();

    if markup.is_empty() {
        VIDEO_PLACEHOLDER.to_string()
    } else {
        markup
    }
}

/// 按科目分组，组的顺序为科目首次出现的顺序
fn render_materials_by_subject(
    materials: &[Material],
    filter: impl Fn(&Material) -> bool,
) -> String {
    let mut groups: Vec<(&str, Vec<&Material>)> = Vec::new();
    for material in materials.iter().filter(|&material| filter(material)) {
        match groups
            .iter()
            .position(|(subject, _)| *subject == material.subject)
        {
            Some(index) => groups[index].1.push(material),
            None => groups.push((material.subject.as_str(), vec![material])),
        }
    }

    let mut markup = String::new();
    for (subject, items) in groups {
        let links: String = items
            .iter()
            .map(|item| {
                if !item.links().is_empty() {
                    item.links()
                        .iter()
                        .map(|link| modal_link(link, "subject-modal__link"))
                        .collect()
                } else if let Some(url) = &item.link {
                    modal_link(
                        &MaterialLink {
                            title: item.title.clone(),
                            url: url.clone(),
                        },
                        "subject-modal__link",
                    )
                } else {
                    String::new()
                }
            })
            .collect();
        markup.push_str(&format!(
            r#"<section class="overview-modal__group"><h3>{}</h3><div class="subject-modal__links">{links}</div></section>"#,
            escape_html(subject)
        ));
    }
    markup
}

/// 科目页中的一个资料区块
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMarkup {
    pub markup: String,
    /// 区块自身隐藏
    pub hidden: bool,
    /// 区块外层容器（标题、说明等）一并隐藏
    pub hide_parent: bool,
}

/// 科目页各区块内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectPageMarkup {
    pub video: String,
    pub klausuren: SectionMarkup,
    pub assignments: SectionMarkup,
    pub learning_products: SectionMarkup,
    /// 页面上所有弹窗的 id
    pub modal_ids: Vec<String>,
}

impl SubjectPageMarkup {
    /// 清单加载失败时的内容
    pub fn fallback() -> Self {
        Self {
            video: VIDEO_PLACEHOLDER.to_string(),
            ..Self::default()
        }
    }
}

/// 生成科目页内容
pub fn render_subject_page(subject: &str, catalog: &Catalog) -> SubjectPageMarkup {
    let video = match catalog.video_for(subject) {
        Some(video) => match video.url.as_deref() {
            Some(url) if !url.is_empty() => video_frame(url, &video.title),
            _ => description_or_pending(video),
        },
        None => VIDEO_PLACEHOLDER.to_string(),
    };

    let mut modal_ids = Vec::new();
    let mut klausuren = Vec::new();
    let mut assignments = Vec::new();
    let mut learning_products = Vec::new();
    for (index, material) in catalog.materials_for(subject) {
        let card = material_card(subject, index, material, &mut modal_ids);
        match material.classify() {
            MaterialKind::Klausur => klausuren.push(card),
            MaterialKind::Assignment => assignments.push(card),
            MaterialKind::LearningProduct => learning_products.push(card),
        }
    }

    SubjectPageMarkup {
        video,
        klausuren: section(klausuren),
        assignments: section(assignments),
        learning_products: section(learning_products),
        modal_ids,
    }
}

fn section(cards: Vec<String>) -> SectionMarkup {
    if cards.is_empty() {
        SectionMarkup {
            markup: String::new(),
            hidden: true,
            hide_parent: true,
        }
    } else {
        SectionMarkup {
            markup: cards.concat(),
            hidden: false,
            hide_parent: false,
        }
    }
}

fn link_card(url: &str, title: &str, description: &str, cta: &str) -> String {
    format!(
        r#"<a class="card subject-card subject-card--link" href="{}" target="_blank" rel="noopener"><h3>{}</h3><p>{}</p><span class="subject-card__cta">{}</span></a>"#,
        escape_html(url),
        escape_html(title),
        escape_html(description),
        escape_html(cta),
    )
}

/// 单个资料卡片
///
/// 只有一个链接的练习直接链接；多个链接生成按钮和弹窗；只有 `link` 时为链接卡片。
fn material_card(
    subject: &str,
    index: usize,
    material: &Material,
    modal_ids: &mut Vec<String>,
) -> String {
    let links = material.links();

    if links.len() == 1 && material.is_assignment() {
        let cta = material
            .modal_cta
            .as_deref()
            .unwrap_or("Arbeitsblatt öffnen");
        return link_card(&links[0].url, &material.title, &material.description, cta);
    }

    if !links.is_empty() {
        let id = modal_id(subject, index);
        let link_class = if material.uses_card_links() {
            "subject-modal__link subject-modal__link--large"
        } else {
            "subject-modal__link"
        };
        let list_class = if material.uses_card_links() {
            "subject-modal__links subject-modal__links--cards"
        } else {
            "subject-modal__links"
        };
        let links_markup: String =
            links.iter().map(|link| modal_link(link, link_class)).collect();
        let cta = material.modal_cta.as_deref().unwrap_or_else(|| {
            match material.classify() {
                MaterialKind::Assignment => "Arbeitsblätter auswählen",
                MaterialKind::Klausur => "Klausur auswählen",
                MaterialKind::LearningProduct => "Material öffnen",
            }
        });
        let title = escape_html(&material.title);
        let description = escape_html(&material.description);
        let markup = format!(
            r#"<button class="subject-card subject-card--button" type="button" data-modal-open="{id}"><h3>{title}</h3><p>{description}</p><span class="subject-card__cta">{}</span></button><div class="goal-overlay subject-modal" id="{id}" hidden><div class="goal-overlay__card subject-modal__card" role="dialog" aria-modal="true" aria-labelledby="{id}-title"><button class="goal-overlay__close" type="button" data-modal-close aria-label="Pop-up schließen">×</button><div class="goal-overlay__body"><h2 id="{id}-title">{title}</h2><p>{description}</p><div class="{list_class}">{links_markup}</div></div></div></div>"#,
            escape_html(cta),
        );
        modal_ids.push(id);
        return markup;
    }

    if let Some(url) = &material.link {
        return link_card(url, &material.title, &material.description, "Zum Öffnen klicken");
    }

    String::new()
}
