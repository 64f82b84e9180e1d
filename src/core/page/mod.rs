//! 页面框架状态：导航、科目条、弹窗
//!
//! 只有状态和计算，不做渲染；供浏览器端适配层调用，命令行不使用。
//! 弹窗 id 来自 [`SubjectPageMarkup::modal_ids`](crate::core::catalog::markup::SubjectPageMarkup)。

pub mod chrome;
pub mod modal;
