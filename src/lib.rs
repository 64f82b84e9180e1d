//! LK-Wahl 门户：科目 pill 栏分页、时间轴、成绩图表与资料清单渲染

pub mod app;
pub mod cli;
pub mod core;
