//! 时间轴事件

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use super::position::{event_positions, marker_percent, TimelineLayout};
use crate::app::error::types::{PortalError, Result};

/// 配置文件中的原始事件，日期格式为 `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTimelineEvent {
    pub date: String,
    #[serde(default)]
    pub display_date: Option<String>,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// 事件文件：若干 `[[events]]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineFile {
    #[serde(default)]
    pub events: Vec<RawTimelineEvent>,
}

impl TimelineFile {
    /// 读取事件文件
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: TimelineFile = toml::from_str(&content)
            .map_err(|e| PortalError::Config(e.to_string()))?;
        debug!(events = file.events.len(), path = %path.display(), "timeline loaded");
        Ok(file)
    }
}

/// 事件相对于今天的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Past,
    Today,
    Future,
}

impl EventStatus {
    /// 按日历日比较
    pub fn of(date: NaiveDate, now: NaiveDateTime) -> Self {
        if now.date() == date {
            EventStatus::Today
        } else if now > date.and_time(NaiveTime::MIN) {
            EventStatus::Past
        } else {
            EventStatus::Future
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Past => "past",
            EventStatus::Today => "today",
            EventStatus::Future => "future",
        }
    }
}

/// 解析后的事件
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub display_date: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub status: EventStatus,
    /// 在时间轴上的百分比位置
    pub position: f64,
}

/// 排好序的时间轴
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    marker: f64,
}

/// 解析 `YYYY-MM-DD`
pub fn parse_event_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| PortalError::InvalidDate(value.to_string()).into())
}

impl Timeline {
    /// 解析、排序并计算状态与位置；日期无效的事件被跳过
    pub fn build(events: &[RawTimelineEvent], now: NaiveDateTime) -> Self {
        let mut parsed: Vec<(NaiveDate, &RawTimelineEvent)> = events
            .iter()
            .filter_map(|event| match parse_event_date(&event.date) {
                Ok(date) => Some((date, event)),
                Err(err) => {
                    warn!(title = %event.title, "skipping timeline event: {err}");
                    None
                }
            })
            .collect();
        parsed.sort_by_key(|(date, _)| *date);

        let dates: Vec<NaiveDate> = parsed.iter().map(|(date, _)| *date).collect();
        let positions = event_positions(&dates);
        let marker = marker_percent(&dates, now);

        let entries = parsed
            .into_iter()
            .zip(positions)
            .map(|((date, event), position)| TimelineEntry {
                date,
                display_date: event
                    .display_date
                    .clone()
                    .unwrap_or_else(|| date.format("%d.%m.").to_string()),
                title: event.title.clone(),
                category: event.category.clone(),
                description: event.description.clone(),
                status: EventStatus::of(date, now),
                position,
            })
            .collect();

        Self { entries, marker }
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// “今天”标记位置
    pub fn marker_percent(&self) -> f64 {
        self.marker
    }

    pub fn layout(&self) -> TimelineLayout {
        TimelineLayout::from_percent(self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, title: &str) -> RawTimelineEvent {
        RawTimelineEvent {
            date: date.to_string(),
            display_date: None,
            title: title.to_string(),
            category: String::new(),
            description: String::new(),
        }
    }

    fn now(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn sorts_events_and_assigns_status() {
        let events = [
            raw("2025-02-18", "LK-Infomarkt"),
            raw("2025-01-12", "Infos"),
            raw("2025-02-16", "LK-Börse"),
        ];
        let timeline = Timeline::build(&events, now(2025, 2, 16));
        let titles: Vec<&str> =
            timeline.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Infos", "LK-Börse", "LK-Infomarkt"]);

        let statuses: Vec<EventStatus> =
            timeline.entries().iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![EventStatus::Past, EventStatus::Today, EventStatus::Future]
        );
        assert_eq!(timeline.marker_percent(), timeline.entries()[1].position);
    }

    #[test]
    fn invalid_dates_are_skipped() {
        let events = [
            raw("2025-01-01", "A"),
            raw("bald", "B"),
            raw("2025-13-40", "C"),
            raw("2025-01-11", "D"),
        ];
        let timeline = Timeline::build(&events, now(2025, 1, 6));
        assert_eq!(timeline.entries().len(), 2);
    }

    #[test]
    fn display_date_falls_back_to_day_and_month() {
        let mut with_label = raw("2025-01-16", "Upload");
        with_label.display_date = Some("16.01.".to_string());
        let events = [raw("2025-02-23", "LK-Wahl"), with_label];
        let timeline = Timeline::build(&events, now(2025, 1, 1));
        assert_eq!(timeline.entries()[0].display_date, "16.01.");
        assert_eq!(timeline.entries()[1].display_date, "23.02.");
    }

    #[test]
    fn empty_timeline_marker_is_zero() {
        let timeline = Timeline::build(&[], now(2025, 1, 1));
        assert!(timeline.is_empty());
        assert_eq!(timeline.layout().future_width, 100.0);
    }

    #[test]
    fn parses_toml_event_file() {
        let file: TimelineFile = toml::from_str(
            r#"
            [[events]]
            date = "2025-01-12"
            display_date = "12.–16.01."
            title = "Infos durch Herrn Ruge"
            category = "Info"

            [[events]]
            date = "2025-02-23"
            title = "LK-Wahl"
            "#,
        )
        .unwrap();
        assert_eq!(file.events.len(), 2);
        assert_eq!(file.events[1].description, "");
    }
}
