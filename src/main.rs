mod config;
mod feed;
mod fetch;
mod logging;
mod models;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{config_path, load_config};
use crate::fetch::FetchTask;
use crate::logging::{get_data_dir, init_logging};
use crate::ui::{Action, App, render};

/// 输入轮询间隔，同时驱动加载动画
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    // 配置文件 (~/.config/posts-explorer/config.toml)
    let config = load_config(&config_path()?)?;

    // 日志文件 (~/.local/share/posts-explorer/posts-explorer.log)
    init_logging(&config.log_level, &get_data_dir()?.join("posts-explorer.log"))?;
    tracing::info!(
        endpoint = %config.endpoint,
        load_delay_ms = config.load_delay_ms,
        "starting posts explorer"
    );

    // 获取任务在后台运行时中执行
    let runtime = tokio::runtime::Runtime::new()?;
    let mut fetch = Some(FetchTask::spawn(
        runtime.handle(),
        config.endpoint.clone(),
        config.load_delay(),
    ));

    // 创建应用状态
    let mut app = App::new();

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, &mut fetch);

    // 退出前取消未完成的获取
    drop(fetch);
    runtime.shutdown_background();

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "terminal loop failed");
    }
    tracing::info!(
        total = app.feed.items().len(),
        visible = app.feed.visible_count(),
        page = app.feed.page(),
        "shutting down"
    );

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    fetch: &mut Option<FetchTask>,
) -> io::Result<()> {
    loop {
        // 获取只会完成一次
        if let Some(posts) = fetch.as_mut().and_then(FetchTask::try_take) {
            app.dispatch(Action::PostsLoaded(posts));
            *fetch = None;
        }

        terminal.draw(|f| render(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        } else {
            app.dispatch(Action::Tick);
        }
    }
    Ok(())
}
