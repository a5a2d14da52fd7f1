//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use chrono::{DateTime, Local};

use crate::feed::Feed;
use crate::models::Post;

/// 应用状态
pub struct App {
    pub feed: Feed,
    pub selected_index: usize, // 当前页内选中的卡片
    pub message: Option<String>,
    pub loaded_at: Option<DateTime<Local>>,
    pub tick: usize, // 加载动画帧
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Browsing,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            feed: Feed::new(),
            selected_index: 0,
            message: None,
            loaded_at: None,
            tick: 0,
        }
    }

    pub fn mode(&self) -> AppMode {
        if self.feed.is_loading() {
            AppMode::Loading
        } else {
            AppMode::Browsing
        }
    }

    /// 确保选中索引在当前页范围内
    pub fn clamp_selection(&mut self) {
        let len = self.feed.page_slice().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 获取当前选中的帖子
    pub fn selected_post(&self) -> Option<&Post> {
        self.feed.page_slice().get(self.selected_index).copied()
    }
}
