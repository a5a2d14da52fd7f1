//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑；翻页箭头和页码的可用性在这里把关，
//! 列表状态机本身不做限制。

use chrono::Local;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::Post;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Tick => self.tick = self.tick.wrapping_add(1),
            Action::PostsLoaded(posts) => self.posts_loaded(posts),

            // 加载中不响应列表操作
            _ if self.mode() == AppMode::Loading => {}

            Action::SelectNext => self.move_down(),
            Action::SelectPrev => self.move_up(),
            Action::RemoveSelected => self.remove_selected(),
            Action::PrevPage => self.prev_page(),
            Action::NextPage => self.next_page(),
            Action::GoToPage(page) => self.go_to_page(page),
        }
        false
    }

    // ============ 加载相关 ============

    /// 获取完成，进入浏览状态
    pub fn posts_loaded(&mut self, posts: Vec<Post>) {
        tracing::info!(count = posts.len(), "posts loaded");
        self.feed.load_items(posts);
        self.loaded_at = Some(Local::now());
        self.clamp_selection();
    }

    // ============ 选择相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.feed.page_slice().len() {
            self.selected_index += 1;
        }
    }

    /// 移除选中的卡片
    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected_post().map(|post| post.id) else {
            return;
        };
        self.feed.remove_item(id);
        tracing::debug!(id, page = self.feed.page(), visible = self.feed.visible_count(), "post removed");
        self.clamp_selection();
        self.message = Some(format!("Removed post #{}", id));
    }

    // ============ 分页相关 ============

    /// 上一页 (第一页时无效)
    pub fn prev_page(&mut self) {
        if self.feed.has_prev() {
            let page = self.feed.page() - 1;
            self.change_page(page);
        }
    }

    /// 下一页 (最后一页时无效)
    pub fn next_page(&mut self) {
        if self.feed.has_next() {
            let page = self.feed.page() + 1;
            self.change_page(page);
        }
    }

    /// 跳到页码按钮对应的页
    pub fn go_to_page(&mut self, page: usize) {
        if self.feed.page_window().contains(page) {
            self.change_page(page);
        }
    }

    fn change_page(&mut self, page: usize) {
        self.feed.set_page(page);
        self.selected_index = 0;
        self.message = None;
        tracing::debug!(page = self.feed.page(), "page changed");
    }
}
