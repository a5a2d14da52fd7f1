//! 通用 UI 组件
//!
//! 帖子卡片、文本截断等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::models::{Post, card_date};

/// 卡片标题最多显示的字符数
pub const TITLE_LIMIT: usize = 55;
/// 卡片正文最多显示的字符数
pub const BODY_LIMIT: usize = 80;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// 超过长度时截断并追加 "..."
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut out: String = text.chars().take(limit).collect();
        out.push_str("...");
        out
    } else {
        text.to_string()
    }
}

/// 首字母大写
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// [组件] 帖子卡片
pub fn render_card(frame: &mut Frame, area: Rect, post: &Post, is_selected: bool) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" #{} ", post.id))
        .title(Line::from(" ✕ ").right_aligned())
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = vec![
        Line::styled(
            truncate(&capitalize_first(&post.title), TITLE_LIMIT),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(truncate(&post.body, BODY_LIMIT)),
        Line::from(""),
        Line::styled(card_date(), Style::default().fg(Color::Gray)),
        Line::styled(post.image_url(), Style::default().fg(Color::DarkGray)),
    ];

    let card = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 55), "short");
        assert_eq!(truncate("", 5), "");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn truncate_long_text() {
        assert_eq!(truncate("abcdefgh", 3), "abc...");
        let body = "x".repeat(100);
        assert_eq!(truncate(&body, BODY_LIMIT).chars().count(), BODY_LIMIT + 3);
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("帖子标题很长", 2), "帖子...");
    }

    #[test]
    fn capitalize() {
        assert_eq!(capitalize_first("sunt aut facere"), "Sunt aut facere");
        assert_eq!(capitalize_first("Already"), "Already");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ßtraße"), "SStraße");
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER.len()));
    }
}
