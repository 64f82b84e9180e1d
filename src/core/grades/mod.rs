//! 成绩图表

pub mod chart;
