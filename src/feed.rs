//! 帖子列表状态机
//!
//! 持有原始帖子列表、已移除 ID 集合和当前页码；
//! 可见列表、总页数、当前页切片都是按需计算的派生视图。

use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::models::{Post, PostId};

/// 每页卡片数
pub const PAGE_SIZE: usize = 6;

/// 页码按钮最多显示的个数
pub const MAX_PAGE_BUTTONS: usize = 10;

/// 页码按钮窗口 (总是从 1 开始)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: RangeInclusive<usize>,
    /// 总页数超过按钮数时显示省略号
    pub overflow: bool,
}

impl PageWindow {
    pub fn contains(&self, page: usize) -> bool {
        self.pages.contains(&page)
    }
}

/// 列表状态
#[derive(Debug, Clone)]
pub struct Feed {
    items: Vec<Post>,
    removed: HashSet<PostId>,
    page: usize,
    loading: bool,
}

impl Default for Feed {
    fn default() -> Self {
        Self::new()
    }
}

impl Feed {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            removed: HashSet::new(),
            page: 1,
            loading: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn items(&self) -> &[Post] {
        &self.items
    }

    pub fn is_removed(&self, id: PostId) -> bool {
        self.removed.contains(&id)
    }

    // ============ 状态转换 ============

    /// 替换整个帖子列表并结束加载状态
    ///
    /// 已移除集合和页码保持不变；旧 ID 只要不与新列表冲突就不再生效。
    pub fn load_items(&mut self, items: Vec<Post>) {
        tracing::debug!(count = items.len(), "load items");
        self.items = items;
        self.loading = false;
        self.restore_page_bound();
    }

    /// 移除一个帖子 (未知或重复的 ID 也接受)
    pub fn remove_item(&mut self, id: PostId) {
        if self.is_removed(id) {
            tracing::trace!(id, "post already removed");
        } else {
            self.removed.insert(id);
        }
        self.restore_page_bound();
    }

    /// 设置当前页
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.restore_page_bound();
    }

    /// 页码越界时自动纠正；没有可见帖子时保持原值
    fn restore_page_bound(&mut self) {
        let count = self.page_count();
        if count == 0 {
            return;
        }
        let corrected = self.page.clamp(1, count);
        if corrected != self.page {
            tracing::debug!(from = self.page, to = corrected, "page corrected");
            self.page = corrected;
        }
    }

    // ============ 派生视图 ============

    /// 未被移除的帖子，保持原始顺序
    pub fn visible_items(&self) -> Vec<&Post> {
        self.items
            .iter()
            .filter(|post| !self.removed.contains(&post.id))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.items
            .iter()
            .filter(|post| !self.removed.contains(&post.id))
            .count()
    }

    pub fn page_count(&self) -> usize {
        self.visible_count().div_ceil(PAGE_SIZE)
    }

    /// 当前页要显示的帖子；页码无效时为空
    pub fn page_slice(&self) -> Vec<&Post> {
        if self.page == 0 || self.page > self.page_count() {
            return Vec::new();
        }
        self.visible_items()
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn page_window(&self) -> PageWindow {
        let count = self.page_count();
        let shown = count.min(MAX_PAGE_BUTTONS);
        PageWindow {
            pages: 1..=shown,
            overflow: count > shown,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }
}
