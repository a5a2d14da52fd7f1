//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, AppMode};
use crate::feed::PAGE_SIZE;
use components::{render_card, spinner_frame};
use layouts::{centered_rect, grid};

const GRID_ROWS: usize = 2;
const GRID_COLS: usize = PAGE_SIZE / GRID_ROWS;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    match app.mode() {
        AppMode::Loading => render_loading(frame, app),
        AppMode::Browsing => render_browsing(frame, app),
    }
}

fn render_loading(frame: &mut Frame, app: &App) {
    let area = centered_rect(40, 20, frame.area());
    let text = format!("{} Loading...", spinner_frame(app.tick));
    let loading = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, area);
}

fn render_browsing(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 标题
            Constraint::Min(10),   // 卡片
            Constraint::Length(3), // 分页
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_cards(frame, app, chunks[1]);
    render_pagination(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut subtitle = format!(
        "{} posts · Page {} of {}",
        app.feed.visible_count(),
        app.feed.page(),
        app.feed.page_count()
    );
    if let Some(loaded_at) = app.loaded_at {
        subtitle.push_str(&format!("  (loaded {})", loaded_at.format("%H:%M:%S")));
    }

    let header = Paragraph::new(vec![
        Line::styled(
            "Posts Explorer",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(subtitle, Style::default().fg(Color::Gray)),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let cards = app.feed.page_slice();
    if cards.is_empty() {
        let empty = Paragraph::new("No more posts to display.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, centered_rect(60, 30, area));
        return;
    }

    for (i, (post, cell)) in cards
        .iter()
        .zip(grid(area, GRID_ROWS, GRID_COLS))
        .enumerate()
    {
        render_card(frame, cell, post, i == app.selected_index);
    }
}

fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(
        " ‹ ",
        if app.feed.has_prev() { enabled } else { disabled },
    )];

    let window = app.feed.page_window();
    for n in window.pages.clone() {
        let style = if n == app.feed.page() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            enabled
        };
        spans.push(Span::styled(format!(" {} ", n), style));
    }
    if window.overflow {
        spans.push(Span::styled(" … ", disabled));
    }

    spans.push(Span::styled(
        " › ",
        if app.feed.has_next() { enabled } else { disabled },
    ));

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = "[←/→] 翻页  [1-9,0] 跳页  [j/k] 选择  [x] 移除  [q] 退出";

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Post, fallback_posts};
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn ready_app() -> App {
        let mut app = App::new();
        app.dispatch(Action::PostsLoaded(fallback_posts()));
        app
    }

    #[test]
    fn loading_screen() {
        let screen = draw(&App::new());
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("Posts Explorer"));
    }

    #[test]
    fn first_page_shows_six_cards() {
        let screen = draw(&ready_app());
        assert!(screen.contains("Posts Explorer"));
        assert!(screen.contains("20 posts · Page 1 of 4"));
        for id in 1..=6 {
            assert!(screen.contains(&format!("#{} ", id)));
        }
        assert!(!screen.contains("#7 "));
        assert!(screen.contains(" 4 "));
        assert!(!screen.contains("…"));
    }

    #[test]
    fn empty_state_after_removing_everything() {
        let mut app = ready_app();
        for _ in 0..20 {
            app.dispatch(Action::RemoveSelected);
        }
        let screen = draw(&app);
        assert!(screen.contains("No more posts to display."));
        assert!(screen.contains("0 posts · Page 1 of 0"));
    }

    #[test]
    fn overflow_indicator_for_many_pages() {
        let mut app = App::new();
        let posts = (1..=100).map(|i| Post::new(i, 1, "title", "body")).collect();
        app.dispatch(Action::PostsLoaded(posts));
        let screen = draw(&app);
        assert!(screen.contains(" 10 "));
        assert!(!screen.contains(" 11 "));
        assert!(screen.contains("…"));
    }

    #[test]
    fn removal_message_in_help_bar() {
        let mut app = ready_app();
        app.dispatch(Action::RemoveSelected);
        assert!(draw(&app).contains("Removed post #1"));
    }
}
