//! 尺寸监听实现

use crossterm::event::Event;
use tracing::trace;

use super::{ResizeCallback, SizeObserver};

/// 终端尺寸监听：由事件循环把 crossterm 事件转交进来
#[derive(Default)]
pub struct TerminalResizeObserver {
    callbacks: Vec<ResizeCallback>,
}

impl TerminalResizeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一个终端事件，是尺寸变化时通知所有回调并返回 true
    pub fn dispatch(&mut self, event: &Event) -> bool {
        match event {
            Event::Resize(columns, rows) => {
                trace!(columns, rows, "terminal resized");
                let width = f64::from(*columns);
                self.callbacks.retain_mut(|callback| callback(width));
                true
            }
            _ => false,
        }
    }
}

impl SizeObserver for TerminalResizeObserver {
    fn observe(&mut self, callback: ResizeCallback) {
        self.callbacks.push(callback);
    }
}

/// 手动触发的尺寸监听，`resize` 同步调用所有回调
#[derive(Default)]
pub struct ManualSizeObserver {
    callbacks: Vec<ResizeCallback>,
}

impl ManualSizeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 通知所有回调，并移除不再需要通知的回调
    pub fn resize(&mut self, width: f64) {
        self.callbacks.retain_mut(|callback| callback(width));
    }

    pub fn observer_count(&self) -> usize {
        self.callbacks.len()
    }
}

impl SizeObserver for ManualSizeObserver {
    fn observe(&mut self, callback: ResizeCallback) {
        self.callbacks.push(callback);
    }
}
