//! 视频与资料清单：加载、链接改写、标记生成

pub mod links;
pub mod loader;
pub mod markup;
pub mod models;
