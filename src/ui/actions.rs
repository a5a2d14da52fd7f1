//! Action 枚举定义 (Intent)
//!
//! 用户交互和获取结果都转化为明确的语义化 Action

use crate::models::Post;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Tick,

    // 获取完成 (成功或回退数据)
    PostsLoaded(Vec<Post>),

    // 卡片选择
    SelectNext,
    SelectPrev,
    RemoveSelected,

    // 分页
    PrevPage,
    NextPage,
    GoToPage(usize),
}
