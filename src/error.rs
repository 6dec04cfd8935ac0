//! 错误类型
//!
//! 区分硬件渲染失败、配置错误、事件输入错误和地址显示错误。

use std::path::PathBuf;

use thiserror::Error;

/// Display Sink 渲染失败。视为不可恢复的设备状态。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render failed: {message}")]
pub struct HardwareError {
    pub message: String,
}

impl HardwareError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("invalid color `{value}` (expected hex like 0x00ff00)")]
    InvalidColor { value: String },
    #[error("color palette must not be empty")]
    EmptyPalette,
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("failed to read events: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed event on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("strip has {len} pixels, an IPv4 address needs {needed}")]
    StripTooShort { len: usize, needed: usize },
    #[error("only IPv4 addresses can be shown, got {0}")]
    NotIpv4(std::net::IpAddr),
    #[error("no local IPv4 address found; pass one explicitly")]
    NoLocalAddress,
}

/// 顶层错误：CLI 把它打印出来并以非零状态退出。
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Hardware(#[from] HardwareError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Event(#[from] EventError),
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
