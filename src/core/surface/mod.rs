//! 渲染表面与尺寸监听抽象
//!
//! 布局算法只和这里的 trait 打交道；终端实现用于生产，测试里用手动触发的替身。

pub mod pill_bar;
pub mod resize;
pub mod terminal;

use crate::core::pills::packing::PillId;

/// 翻页控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

/// 承载一组 pill 的容器
pub trait PillSurface {
    /// 容器内 pill 的数量
    fn pill_count(&self) -> usize;

    /// 容器可用宽度
    fn container_width(&self) -> f64;

    /// pill 之间的间距
    fn gap(&self) -> f64;

    /// 当前设置的统一内边距，`None` 表示未设置
    fn padding(&self) -> Option<f64>;

    /// 设置或移除统一内边距
    fn set_padding(&mut self, padding: Option<f64>);

    /// 按当前内边距测量每个 pill 的宽度
    fn measure_pills(&mut self) -> Vec<f64>;

    /// 测量翻页控件宽度（两个控件外观相同）
    fn measure_control(&mut self) -> f64;

    fn set_pill_visible(&mut self, id: PillId, visible: bool);

    /// 把控件挂到容器上或从容器上移除
    fn set_control_attached(&mut self, control: Control, attached: bool);

    /// 尺寸监听器报告了新的容器宽度
    fn resize(&mut self, _width: f64) {}
}

/// 尺寸回调，参数为新的容器宽度；返回 `false` 表示不再需要通知
pub type ResizeCallback = Box<dyn FnMut(f64) -> bool>;

/// 尺寸变化监听
pub trait SizeObserver {
    /// 注册回调
    fn observe(&mut self, callback: ResizeCallback);
}
