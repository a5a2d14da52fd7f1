use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fetch::{DEFAULT_ENDPOINT, DEFAULT_LOAD_DELAY_MS};

/// 配置文件结构 (所有字段可省略)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 帖子接口地址
    pub endpoint: String,
    /// 启动后延迟多久再请求
    pub load_delay_ms: u64,
    /// 日志过滤级别 (EnvFilter 语法)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

/// 获取配置文件路径 (~/.config/posts-explorer/config.toml)
pub fn config_path() -> io::Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate config directory"))?;
    Ok(dir.join("posts-explorer").join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
