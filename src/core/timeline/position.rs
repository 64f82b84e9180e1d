//! 时间轴位置插值
//!
//! 事件按日期落在 0–100 的刻度上，“今天”标记在相邻两个事件之间线性插值。

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// 日期当天零点
fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn millis_between(later: NaiveDateTime, earlier: NaiveDateTime) -> i64 {
    (later - earlier).num_milliseconds()
}

/// 每个事件在时间轴上的百分比位置
///
/// `dates` 须按升序排列；所有事件同一天时分母按 1 毫秒计。
pub fn event_positions(dates: &[NaiveDate]) -> Vec<f64> {
    let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
        return Vec::new();
    };
    let range = millis_between(midnight(last), midnight(first)).max(1) as f64;

    dates
        .iter()
        .map(|&date| {
            millis_between(midnight(date), midnight(first)) as f64 / range
                * 100.0
        })
        .collect()
}

/// “今天”标记的百分比位置
///
/// `dates` 须按升序排列。早于（含）第一个事件为 0，晚于（含）最后一个事件为 100；
/// 当天有事件时取该事件的位置。
pub fn marker_percent(dates: &[NaiveDate], now: NaiveDateTime) -> f64 {
    let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
        return 0.0;
    };
    if now <= midnight(first) {
        return 0.0;
    }
    if now >= midnight(last) {
        return 100.0;
    }

    let positions = event_positions(dates);
    if let Some(index) = dates.iter().position(|&date| date == now.date()) {
        return positions[index];
    }

    // now 严格位于首尾之间，next_index 一定在 1..len 内
    let next_index = dates
        .iter()
        .position(|&date| now <= midnight(date))
        .unwrap_or(dates.len() - 1);
    let prev_index = next_index.saturating_sub(1);

    let prev = midnight(dates[prev_index]);
    let next = midnight(dates[next_index]);
    let span = millis_between(next, prev).max(1);
    let progress = millis_between(now, prev).clamp(0, span);
    let ratio = progress as f64 / span as f64;

    positions[prev_index] + (positions[next_index] - positions[prev_index]) * ratio
}

/// 时间轴各部分的横向位置（百分比）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineLayout {
    pub past_width: f64,
    pub future_left: f64,
    pub future_width: f64,
    pub marker_left: f64,
}

impl TimelineLayout {
    pub fn from_percent(percent: f64) -> Self {
        let percent = percent.clamp(0.0, 100.0);
        Self {
            past_width: percent,
            future_left: percent,
            future_width: 100.0 - percent,
            marker_left: percent,
        }
    }
}
