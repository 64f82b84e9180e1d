//! 键盘输入处理

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};

/// Pill 栏支持的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillCommand {
    Previous,
    Next,
    Refresh,
    Quit,
}

impl PillCommand {
    /// 按键映射
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left | KeyCode::Char('h') => Some(PillCommand::Previous),
            KeyCode::Right | KeyCode::Char('l') => Some(PillCommand::Next),
            KeyCode::Char('r') => Some(PillCommand::Refresh),
            KeyCode::Esc | KeyCode::Char('q') => Some(PillCommand::Quit),
            _ => None,
        }
    }
}

/// 键盘输入处理器，带同键防抖
pub struct KeyboardHandler {
    last_key_time: Option<Instant>,
    last_key_code: Option<KeyCode>,
    debounce: Duration,
}

impl KeyboardHandler {
    /// 创建新的键盘处理器
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            last_key_time: None,
            last_key_code: None,
            debounce: Duration::from_millis(debounce_ms),
        }
    }

    /// 处理按键事件，忽略松开事件和防抖间隔内重复的同一按键
    pub fn command_for(&mut self, event: &KeyEvent) -> Option<PillCommand> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        if !self.should_process_key_at(event.code, Instant::now()) {
            return None;
        }
        PillCommand::from_key(event.code)
    }

    /// 判断是否应该处理按键（防抖处理）
    fn should_process_key_at(&mut self, code: KeyCode, now: Instant) -> bool {
        let is_same_key = self.last_key_code == Some(code);
        let within_debounce = self
            .last_key_time
            .is_some_and(|last| now.duration_since(last) < self.debounce);

        if is_same_key && within_debounce {
            return false;
        }

        self.last_key_code = Some(code);
        self.last_key_time = Some(now);
        true
    }
}

impl Default for KeyboardHandler {
    /// 默认 150ms 防抖
    fn default() -> Self {
        Self::new(150)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(PillCommand::from_key(KeyCode::Left), Some(PillCommand::Previous));
        assert_eq!(PillCommand::from_key(KeyCode::Char('l')), Some(PillCommand::Next));
        assert_eq!(PillCommand::from_key(KeyCode::Esc), Some(PillCommand::Quit));
        assert_eq!(PillCommand::from_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn debounces_repeated_key() {
        let mut handler = KeyboardHandler::new(150);
        let start = Instant::now();
        assert!(handler.should_process_key_at(KeyCode::Right, start));
        assert!(!handler.should_process_key_at(
            KeyCode::Right,
            start + Duration::from_millis(50)
        ));
        assert!(handler.should_process_key_at(
            KeyCode::Right,
            start + Duration::from_millis(200)
        ));
    }

    #[test]
    fn different_keys_are_not_debounced() {
        let mut handler = KeyboardHandler::default();
        let start = Instant::now();
        assert!(handler.should_process_key_at(KeyCode::Right, start));
        assert!(handler.should_process_key_at(KeyCode::Left, start));
    }

    #[test]
    fn ignores_key_release() {
        let mut handler = KeyboardHandler::new(0);
        let mut event = KeyEvent::from(KeyCode::Right);
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.command_for(&event), None);
        event.kind = KeyEventKind::Press;
        assert_eq!(handler.command_for(&event), Some(PillCommand::Next));
    }
}
