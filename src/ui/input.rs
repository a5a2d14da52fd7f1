//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Loading => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        AppMode::Browsing => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Some(Action::SelectNext),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Some(Action::SelectPrev),
            KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Delete => {
                Some(Action::RemoveSelected)
            }
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevPage),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextPage),
            // 0 代表第 10 页
            KeyCode::Char('0') => Some(Action::GoToPage(10)),
            KeyCode::Char(c) => c.to_digit(10).map(|n| Action::GoToPage(n as usize)),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.mode(), key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
