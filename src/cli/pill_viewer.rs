//! 终端里的科目 pill 栏

use colored::*;
use crossterm::event::{self, Event};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

use crate::app::config::settings::{InputSettings, PillSettings};
use crate::app::error::types::Result;
use crate::core::input::keyboard::{KeyboardHandler, PillCommand};
use crate::core::pills::paginator::PillPaginator;
use crate::core::surface::pill_bar::TerminalPillSurface;
use crate::core::surface::resize::TerminalResizeObserver;
use crate::core::surface::terminal::PillTerminal;

/// 交互式 pill 栏
pub struct PillViewer {
    paginator: Rc<RefCell<PillPaginator<TerminalPillSurface>>>,
    resize_observer: TerminalResizeObserver,
    terminal: PillTerminal,
    keyboard_handler: KeyboardHandler,
    use_color: bool,
}

impl PillViewer {
    /// 创建新的 pill 栏；没有科目时返回 `None`
    pub fn new(
        labels: Vec<String>,
        settings: &PillSettings,
        input: &InputSettings,
        use_color: bool,
    ) -> Option<Self> {
        let terminal = PillTerminal::new();
        let surface = TerminalPillSurface::new(
            labels,
            terminal.width(),
            settings.gap,
            settings.control_label.clone(),
        );
        let paginator = Rc::new(RefCell::new(PillPaginator::attach(surface, settings)?));

        let mut resize_observer = TerminalResizeObserver::new();
        PillPaginator::bind(&paginator, &mut resize_observer);

        Some(Self {
            paginator,
            resize_observer,
            terminal,
            keyboard_handler: KeyboardHandler::new(input.debounce_ms),
            use_color,
        })
    }

    /// 运行交互循环
    pub fn run(&mut self) -> Result<()> {
        self.terminal.enter()?;
        self.redraw()?;

        loop {
            let event = event::read()?;
            if self.resize_observer.dispatch(&event) {
                self.redraw()?;
                continue;
            }

            let Event::Key(key) = event else {
                continue;
            };
            let Some(command) = self.keyboard_handler.command_for(&key) else {
                continue;
            };

            match command {
                PillCommand::Quit => break,
                PillCommand::Previous => self.paginator.borrow_mut().previous(),
                PillCommand::Next => self.paginator.borrow_mut().next(),
                PillCommand::Refresh => {
                    let width = self.terminal.width();
                    self.paginator.borrow_mut().resize(width);
                }
            }
            self.redraw()?;
        }

        // 终端由 PillTerminal 的 Drop 恢复
        info!("pill viewer closed");
        Ok(())
    }

    fn redraw(&self) -> Result<()> {
        let paginator = self.paginator.borrow();
        let state = paginator.state();

        let page_info = format!(
            "第 {} 页 / 共 {} 页",
            state.current_page() + 1,
            state.total_pages().max(1)
        );
        self.terminal.draw([
            paginator.surface().render_line(self.use_color),
            String::new(),
            page_info.bright_white().bold().to_string(),
            "导航: ←→ 翻页 | r 重新布局 | ESC/q 退出"
                .bright_black()
                .to_string(),
        ])
    }
}

/// 非交互模式：按给定宽度输出每一页
pub fn print_pages(
    labels: Vec<String>,
    width: f64,
    settings: &PillSettings,
    use_color: bool,
) {
    let surface = TerminalPillSurface::new(
        labels,
        width,
        settings.gap,
        settings.control_label.clone(),
    );
    let Some(mut paginator) = PillPaginator::attach(surface, settings) else {
        return;
    };

    let total = paginator.state().total_pages();
    for page in 0..total {
        println!(
            "{:>2}/{}  {}",
            page + 1,
            total,
            paginator.surface().render_line(use_color)
        );
        paginator.next();
    }
}
