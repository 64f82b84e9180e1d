//! 交互式 pill 栏的终端会话

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use tracing::debug;

use crate::app::error::types::Result;

/// 无法获取终端尺寸时使用的宽度
const FALLBACK_COLUMNS: u16 = 80;

/// 终端会话：备用屏幕 + 原始模式，释放时恢复
pub struct PillTerminal {
    active: bool,
}

impl PillTerminal {
    pub fn new() -> Self {
        Self { active: false }
    }

    /// 进入备用屏幕与原始模式
    pub fn enter(&mut self) -> Result<()> {
        if !self.active {
            terminal::enable_raw_mode()?;
            execute!(io::stdout(), EnterAlternateScreen, Hide)?;
            self.active = true;
            debug!(columns = self.columns(), "terminal session started");
        }
        Ok(())
    }

    /// 离开备用屏幕，恢复终端
    pub fn leave(&mut self) -> Result<()> {
        if self.active {
            execute!(io::stdout(), Show, LeaveAlternateScreen)?;
            terminal::disable_raw_mode()?;
            self.active = false;
        }
        Ok(())
    }

    /// 当前列数
    pub fn columns(&self) -> u16 {
        terminal::size()
            .map(|(columns, _)| columns)
            .unwrap_or(FALLBACK_COLUMNS)
    }

    /// pill 栏可用宽度
    pub fn width(&self) -> f64 {
        f64::from(self.columns())
    }

    /// 清屏后从左上角逐行输出
    pub fn draw<I, L>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = L>,
        L: std::fmt::Display,
    {
        let mut stdout = io::stdout();
        queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in lines {
            // 原始模式下换行不回到行首
            queue!(stdout, Print(line), Print("\r\n"))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Default for PillTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PillTerminal {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
