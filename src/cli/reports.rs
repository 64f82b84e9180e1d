//! 非交互子命令的终端输出

use colored::*;

use crate::core::catalog::markup::{SectionMarkup, SubjectPageMarkup};
use crate::core::grades::chart::{GradePlacement, GradeRange};
use crate::core::timeline::events::{EventStatus, Timeline};

/// 百分比换算成轨道上的列
fn column_for(percent: f64, width: usize) -> usize {
    let last = width.saturating_sub(1);
    ((percent / 100.0) * last as f64).round().clamp(0.0, last as f64) as usize
}

/// 时间轴：标记行、轨道、事件列表
pub fn render_timeline(timeline: &Timeline, width: usize) -> String {
    let width = width.max(2);
    let layout = timeline.layout();
    let marker = column_for(layout.marker_left, width);

    let mut track: Vec<char> = (0..width)
        .map(|column| if column < marker { '━' } else { '─' })
        .collect();
    for entry in timeline.entries() {
        track[column_for(entry.position, width)] = '●';
    }

    let mut output = String::new();
    output.push_str(&format!("{}▼ heute ({:.1}%)\n", " ".repeat(marker), layout.marker_left));
    output.push_str(&track.into_iter().collect::<String>());
    output.push('\n');

    for entry in timeline.entries() {
        let line = format!(
            "{:<12} {:<28} [{}] {}",
            entry.display_date, entry.title, entry.category, entry.description
        );
        let line = match entry.status {
            EventStatus::Past => line.bright_black().to_string(),
            EventStatus::Today => line.bright_green().bold().to_string(),
            EventStatus::Future => line,
        };
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// 成绩刻度：每个可见点一行
pub fn render_grades(placements: &[GradePlacement], range: GradeRange, width: usize) -> String {
    let width = width.max(2);
    let mut output = format!("{:.1} … {:.1}\n", range.min, range.max);

    for placement in placements {
        match placement.percent {
            Some(percent) => {
                let column = column_for(percent, width);
                output.push_str(&format!(
                    "{}{}{} {}\n",
                    "·".repeat(column),
                    "◆".bright_cyan(),
                    "·".repeat(width - column - 1),
                    format!("{:.1}", placement.grade).replace('.', ","),
                ));
            }
            None => {
                output.push_str(&format!(
                    "{} {}\n",
                    "ausgeblendet".bright_black(),
                    format!("{:.1}", placement.grade).replace('.', ","),
                ));
            }
        }
    }
    output
}

fn section_block(name: &str, section: &SectionMarkup) -> String {
    let mut block = format!("<!-- {name}");
    if section.hidden {
        block.push_str(" hidden");
    }
    if section.hide_parent {
        block.push_str(" hide-parent");
    }
    block.push_str(" -->\n");
    if !section.markup.is_empty() {
        block.push_str(&section.markup);
        block.push('\n');
    }
    block
}

/// 科目页各区块依次输出，用注释标明区块与隐藏状态
pub fn render_subject_markup(page: &SubjectPageMarkup) -> String {
    let mut output = String::new();
    output.push_str("<!-- video -->\n");
    output.push_str(&page.video);
    output.push('\n');
    output.push_str(&section_block("klausuren", &page.klausuren));
    output.push_str(&section_block("assignments", &page.assignments));
    output.push_str(&section_block("learning-products", &page.learning_products));
    output
}
