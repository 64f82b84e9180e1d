//! 终端上的 pill 栏

use colored::*;
use unicode_width::UnicodeWidthStr;

use super::{Control, PillSurface};
use crate::core::pills::packing::PillId;

/// 在一行终端文本里渲染 pill，单位为列
#[derive(Debug, Clone)]
pub struct TerminalPillSurface {
    labels: Vec<String>,
    visible: Vec<bool>,
    width: f64,
    gap: f64,
    padding: Option<f64>,
    control_label: String,
    previous_attached: bool,
    next_attached: bool,
}

impl TerminalPillSurface {
    /// 创建新的 pill 栏
    pub fn new(
        labels: Vec<String>,
        width: f64,
        gap: f64,
        control_label: impl Into<String>,
    ) -> Self {
        let visible = vec![true; labels.len()];
        Self {
            labels,
            visible,
            width,
            gap,
            padding: None,
            control_label: control_label.into(),
            previous_attached: false,
            next_attached: false,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_attached(&self, control: Control) -> bool {
        match control {
            Control::Previous => self.previous_attached,
            Control::Next => self.next_attached,
        }
    }

    /// 当前可见的 pill 标签
    pub fn visible_labels(&self) -> Vec<&str> {
        self.labels
            .iter()
            .zip(&self.visible)
            .filter(|(_, visible)| **visible)
            .map(|(label, _)| label.as_str())
            .collect()
    }

    /// 渲染成一行文本
    pub fn render_line(&self, use_color: bool) -> String {
        let mut parts: Vec<String> = Vec::new();

        if self.previous_attached {
            parts.push(self.format_control(use_color));
        }
        for label in self.visible_labels() {
            let pill = self.format_pill(label);
            parts.push(if use_color {
                pill.black().on_bright_cyan().to_string()
            } else {
                pill
            });
        }
        if self.next_attached {
            parts.push(self.format_control(use_color));
        }

        parts.join(&" ".repeat(self.gap_columns()))
    }

    fn format_pill(&self, label: &str) -> String {
        let padding = " ".repeat(self.padding_columns());
        format!("[{padding}{label}{padding}]")
    }

    fn format_control(&self, use_color: bool) -> String {
        let control = self.format_pill(&self.control_label);
        if use_color {
            control.bright_black().bold().to_string()
        } else {
            control
        }
    }

    fn padding_columns(&self) -> usize {
        self.padding.unwrap_or(0.0).max(0.0).floor() as usize
    }

    fn gap_columns(&self) -> usize {
        self.gap.max(0.0).round() as usize
    }

    /// 按终端显示宽度计算，全角字符占两列
    fn pill_width(&self, label: &str) -> f64 {
        (label.width() + 2 + 2 * self.padding_columns()) as f64
    }
}

impl PillSurface for TerminalPillSurface {
    fn pill_count(&self) -> usize {
        self.labels.len()
    }

    fn container_width(&self) -> f64 {
        self.width
    }

    fn gap(&self) -> f64 {
        self.gap_columns() as f64
    }

    fn padding(&self) -> Option<f64> {
        self.padding
    }

    fn set_padding(&mut self, padding: Option<f64>) {
        self.padding = padding;
    }

    fn measure_pills(&mut self) -> Vec<f64> {
        self.labels
            .iter()
            .map(|label| self.pill_width(label))
            .collect()
    }

    fn measure_control(&mut self) -> f64 {
        self.pill_width(&self.control_label)
    }

    fn set_pill_visible(&mut self, id: PillId, visible: bool) {
        if let Some(slot) = self.visible.get_mut(id.0) {
            *slot = visible;
        }
    }

    fn set_control_attached(&mut self, control: Control, attached: bool) {
        match control {
            Control::Previous => self.previous_attached = attached,
            Control::Next => self.next_attached = attached,
        }
    }

    fn resize(&mut self, width: f64) {
        self.width = width;
    }
}
