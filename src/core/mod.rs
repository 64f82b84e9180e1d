//! 核心逻辑：布局算法与数据处理，不依赖具体的渲染表面

pub mod catalog;
pub mod grades;
pub mod input;
pub mod page;
pub mod pills;
pub mod surface;
pub mod timeline;
