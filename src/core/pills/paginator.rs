//! Pill 分页器：测量、装箱、渲染

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use super::packing::{ideal_padding, PillId, PillMetrics};
use super::pagination::PaginationState;
use crate::app::config::settings::PillSettings;
use crate::core::surface::{Control, PillSurface, SizeObserver};

/// 绑定到一个容器的分页器
pub struct PillPaginator<S: PillSurface> {
    surface: S,
    state: PaginationState,
    min_padding: f64,
}

impl<S: PillSurface> PillPaginator<S> {
    /// 挂载到容器并完成首次布局；容器里没有 pill 时返回 `None`
    pub fn attach(surface: S, settings: &PillSettings) -> Option<Self> {
        if surface.pill_count() == 0 {
            debug!("pill container is empty, skipping");
            return None;
        }

        let mut paginator = Self {
            surface,
            state: PaginationState::default(),
            min_padding: settings.min_padding,
        };
        paginator.update();
        Some(paginator)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// 重新布局：内边距、测量、装箱、收敛页码、渲染
    pub fn update(&mut self) {
        self.update_padding();

        let metrics = PillMetrics {
            available_width: self.surface.container_width(),
            gap: self.surface.gap(),
            control_width: self.surface.measure_control(),
            item_widths: self.surface.measure_pills(),
        };

        let pages = metrics.pages();
        debug!(
            available_width = metrics.available_width,
            pills = metrics.item_widths.len(),
            pages = pages.len(),
            "pill layout recomputed"
        );
        self.state.replace_pages(pages);
        self.render();
    }

    /// 尺寸变化后重新布局
    pub fn resize(&mut self, width: f64) {
        self.surface.resize(width);
        self.update();
    }

    /// 上一页（不重新装箱）
    pub fn previous(&mut self) {
        if self.state.go_to_previous() {
            self.render();
        }
    }

    /// 下一页（不重新装箱）
    pub fn next(&mut self) {
        if self.state.go_to_next() {
            self.render();
        }
    }

    /// 把当前页的可见性应用到容器
    pub fn render(&mut self) {
        let visibility = self.state.visibility();
        trace!(
            page = self.state.current_page(),
            visible = visibility.visible.len(),
            "render pill page"
        );

        for index in 0..self.surface.pill_count() {
            self.surface.set_pill_visible(PillId(index), false);
        }
        for id in &visibility.visible {
            self.surface.set_pill_visible(*id, true);
        }
        self.surface
            .set_control_attached(Control::Previous, visibility.show_previous);
        self.surface
            .set_control_attached(Control::Next, visibility.show_next);
    }

    fn update_padding(&mut self) {
        let text_widths = self.measure_text_widths();
        let padding = ideal_padding(
            &text_widths,
            self.surface.container_width(),
            self.surface.gap(),
            self.min_padding,
        );
        self.surface.set_padding(Some(padding));
    }

    /// 内边距临时清零后测量纯内容宽度，之后恢复原值
    fn measure_text_widths(&mut self) -> Vec<f64> {
        let previous = self.surface.padding();
        self.surface.set_padding(Some(0.0));
        let widths = self.surface.measure_pills();
        self.surface.set_padding(previous);
        widths
    }
}

impl<S: PillSurface + 'static> PillPaginator<S> {
    /// 注册到尺寸监听器；分页器被释放后回调在下一次通知时被移除
    pub fn bind(
        paginator: &Rc<RefCell<Self>>,
        observer: &mut dyn SizeObserver,
    ) {
        let weak = Rc::downgrade(paginator);
        observer.observe(Box::new(move |width| match weak.upgrade() {
            Some(paginator) => {
                paginator.borrow_mut().resize(width);
                true
            }
            None => false,
        }));
    }
}
