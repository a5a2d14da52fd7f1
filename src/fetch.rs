//! 远程帖子获取
//!
//! 启动后延迟一段时间发出唯一一次 GET 请求；任何失败都用固定的回退数据代替。
//! 请求在 tokio 任务中运行，结果通过 oneshot 通道交回 UI 循环。

use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::models::{Post, fallback_posts};

/// 默认的帖子接口
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// 默认的加载延迟 (毫秒)
pub const DEFAULT_LOAD_DELAY_MS: u64 = 5000;

const USER_AGENT: &str = concat!("posts-explorer/", env!("CARGO_PKG_VERSION"));

/// 获取失败的原因 (对外统一按失败处理)
#[derive(Error, Debug)]
pub enum FetchError {
    /// 网络或客户端错误
    #[error("network error: {0}")]
    Request(#[source] reqwest::Error),

    /// 非 2xx 响应
    #[error("HTTP error {status}: {url}")]
    Status { status: u16, url: String },

    /// 读取响应体失败
    #[error("failed to read response: {0}")]
    Body(#[source] reqwest::Error),

    /// 响应体不是帖子数组
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 解析帖子数组
pub fn parse_posts(body: &str) -> Result<Vec<Post>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// 请求并解析帖子列表
pub async fn fetch_posts(url: &str) -> Result<Vec<Post>, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Request)?;

    let response = client.get(url).send().await.map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await.map_err(FetchError::Body)?;
    parse_posts(&body)
}

/// 获取帖子，失败时返回回退数据
pub async fn load_posts(url: &str) -> Vec<Post> {
    match fetch_posts(url).await {
        Ok(posts) => {
            tracing::info!(count = posts.len(), url, "posts fetched");
            posts
        }
        Err(err) => {
            tracing::warn!(error = %err, url, "fetch failed, using fallback posts");
            fallback_posts()
        }
    }
}

/// 正在进行的获取任务
///
/// 丢弃时中止任务，等待中的延迟和请求都会被取消。
pub struct FetchTask {
    handle: JoinHandle<()>,
    rx: Option<oneshot::Receiver<Vec<Post>>>,
}

impl FetchTask {
    pub fn spawn(runtime: &Handle, endpoint: String, delay: Duration) -> Self {
        let (tx, rx) = oneshot::channel();
        tracing::debug!(endpoint = %endpoint, delay_ms = delay.as_millis() as u64, "fetch scheduled");

        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let posts = load_posts(&endpoint).await;
            // 接收端已关闭说明 UI 已退出
            if tx.send(posts).is_err() {
                tracing::debug!("fetch result dropped, receiver closed");
            }
        });

        Self {
            handle,
            rx: Some(rx),
        }
    }

    /// 取出结果 (只会成功一次)
    pub fn try_take(&mut self) -> Option<Vec<Post>> {
        let rx = self.rx.as_mut()?;
        match rx.try_recv() {
            Ok(posts) => {
                self.rx = None;
                Some(posts)
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.rx = None;
                None
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// 中止任务并关闭接收端
    pub fn cancel(&mut self) {
        if !self.is_finished() {
            tracing::debug!("cancelling pending fetch");
        }
        self.handle.abort();
        self.rx = None;
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 本机 discard 端口，连接会被拒绝
    const UNREACHABLE: &str = "http://127.0.0.1:9/posts";

    #[test]
    fn parse_wire_records() {
        let body = r#"[
            {"userId": 1, "id": 1, "title": "sunt aut", "body": "quia et"},
            {"userId": 2, "id": 11, "title": "et ea", "body": "delectus"}
        ]"#;
        let posts = parse_posts(body).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0], Post::new(1, 1, "sunt aut", "quia et"));
        assert_eq!(posts[1].id, 11);
        assert_eq!(posts[1].user_id, 2);
    }

    #[test]
    fn parse_rejects_malformed_body() {
        assert!(matches!(parse_posts("<html>"), Err(FetchError::Parse(_))));
        assert!(matches!(parse_posts(r#"{"id": 1}"#), Err(FetchError::Parse(_))));
        assert!(matches!(
            parse_posts(r#"[{"id": "x", "title": "t", "body": "b"}]"#),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn parse_empty_array() {
        assert!(parse_posts("[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_reports_connection_failure() {
        let result = fetch_posts(UNREACHABLE).await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }

    #[tokio::test]
    async fn load_falls_back_on_failure() {
        let posts = load_posts(UNREACHABLE).await;
        assert_eq!(posts, fallback_posts());
    }

    #[tokio::test]
    async fn task_delivers_once() {
        let mut task = FetchTask::spawn(&Handle::current(), UNREACHABLE.to_string(), Duration::ZERO);

        let mut delivered = None;
        for _ in 0..500 {
            if let Some(posts) = task.try_take() {
                delivered = Some(posts);
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let posts = delivered.expect("fetch task never delivered");
        assert_eq!(posts.len(), 20);
        assert!(task.try_take().is_none());
    }

    #[tokio::test]
    async fn cancelled_task_never_delivers() {
        let mut task = FetchTask::spawn(
            &Handle::current(),
            UNREACHABLE.to_string(),
            Duration::from_secs(60),
        );
        assert!(task.try_take().is_none());

        task.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(task.is_finished());
        assert!(task.try_take().is_none());
    }
}
