//! 成绩图表：把成绩点放到 min–max 刻度上

use tracing::{debug, warn};

/// 解析德式小数（逗号作小数点），失败时返回 `None`
pub fn parse_german_float(value: &str) -> Option<f64> {
    value
        .trim()
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// 图表刻度范围
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeRange {
    pub min: f64,
    pub max: f64,
}

impl Default for GradeRange {
    fn default() -> Self {
        Self { min: 7.7, max: 10.0 }
    }
}

impl GradeRange {
    /// 从字符串构造，缺省或无法解析的一端使用 `defaults`
    ///
    /// 结果不满足 `min < max` 时整体退回 `defaults`。
    pub fn parse(min: Option<&str>, max: Option<&str>, defaults: Self) -> Self {
        let range = Self {
            min: min.and_then(parse_german_float).unwrap_or(defaults.min),
            max: max.and_then(parse_german_float).unwrap_or(defaults.max),
        };
        if range.min >= range.max {
            warn!(
                min = range.min,
                max = range.max,
                "grade range is empty, using configured range"
            );
            return defaults;
        }
        range
    }

    pub fn contains(&self, grade: f64) -> bool {
        grade >= self.min && grade <= self.max
    }

    /// 成绩在刻度上的百分比
    pub fn percent(&self, grade: f64) -> f64 {
        (grade - self.min) / (self.max - self.min) * 100.0
    }
}

/// 一个成绩点的布局结果
#[derive(Debug, Clone, PartialEq)]
pub struct GradePlacement {
    /// 在输入中的下标
    pub index: usize,
    pub grade: f64,
    /// 超出范围的点不显示，`percent` 为 `None`
    pub percent: Option<f64>,
}

impl GradePlacement {
    pub fn is_visible(&self) -> bool {
        self.percent.is_some()
    }
}

/// 放置成绩点
///
/// 每个点优先取标签文本，其次取备用数值，都无效时按下限处理。
/// 返回的可见点按成绩从高到低排列，隐藏点排在最后并保持原顺序。
pub fn place_grade_points(
    points: &[(Option<&str>, Option<f64>)],
    range: GradeRange,
) -> Vec<GradePlacement> {
    let placements: Vec<GradePlacement> = points
        .iter()
        .enumerate()
        .map(|(index, (label, fallback))| {
            let grade = label
                .and_then(parse_german_float)
                .or(fallback.filter(|value| value.is_finite()))
                .unwrap_or(range.min);
            let percent = range
                .contains(grade)
                .then(|| range.percent(grade));
            if percent.is_none() {
                debug!(index, grade, "grade outside chart range, hidden");
            }
            GradePlacement {
                index,
                grade,
                percent,
            }
        })
        .collect();

    let (mut visible, hidden): (Vec<_>, Vec<_>) = placements
        .into_iter()
        .partition(GradePlacement::is_visible);
    visible.sort_by(|a, b| b.grade.total_cmp(&a.grade));
    visible.extend(hidden);
    visible
}
