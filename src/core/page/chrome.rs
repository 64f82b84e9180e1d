//! 导航菜单、科目条与页脚

use chrono::{Datelike, NaiveDate};

/// 移动端导航菜单
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 切换开关，返回新的 `aria-expanded` 值
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// 点击了菜单中的链接：菜单打开时关闭，返回是否关闭了菜单
    pub fn link_clicked(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// 科目条尺寸
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StripMetrics {
    pub label_height: f64,
    pub strip_height: f64,
    /// 收起后剩余高度
    pub collapsed_height: f64,
}

/// 页面顶部的科目条，滚动超过标签高度后收起
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubjectStrip {
    metrics: StripMetrics,
    collapsed: bool,
}

impl SubjectStrip {
    /// 由展开状态下测得的高度计算尺寸
    pub fn metrics(label_height: f64, strip_height: f64) -> StripMetrics {
        StripMetrics {
            label_height,
            strip_height,
            collapsed_height: (strip_height - label_height).max(0.0),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn current_metrics(&self) -> StripMetrics {
        self.metrics
    }

    /// 滚动超过标签高度时收起
    pub fn should_collapse(&self, scroll_y: f64) -> bool {
        scroll_y > self.metrics.label_height.max(0.0)
    }

    /// 重新测量后按滚动位置更新收起状态，返回是否收起
    pub fn update(
        &mut self,
        label_height: f64,
        strip_height: f64,
        scroll_y: f64,
    ) -> bool {
        self.metrics = Self::metrics(label_height, strip_height);
        self.collapsed = self.should_collapse(scroll_y);
        self.collapsed
    }
}

/// 页脚年份
pub fn footer_year(today: NaiveDate) -> i32 {
    today.year()
}
