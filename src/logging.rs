//! 日志初始化
//!
//! 终端被 UI 占用，日志写入数据目录下的文件。

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// 获取数据目录路径 (~/.local/share/posts-explorer/)
pub fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate data directory"))?
        .join("posts-explorer");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 解析日志级别，无效时退回默认级别
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// 安装全局 subscriber，日志追加到 `path`
pub fn init_logging(level: &str, path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(build_filter(level))
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(log = %path.display(), "logging initialized");
    Ok(())
}
