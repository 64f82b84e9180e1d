//! Fächer-Pills：按容器宽度分页显示

pub mod packing;
pub mod pagination;
pub mod paginator;
