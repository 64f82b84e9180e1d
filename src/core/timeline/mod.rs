//! 时间轴：事件状态与“今天”标记

pub mod events;
pub mod position;
