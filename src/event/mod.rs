//! 事件输入模块
//!
//! 核心只消费 `(category, direction)`。这里提供方向判定（本机地址集合）、
//! 从分层摘要得到类别的分类器，以及逐行 JSON 的回放源。

mod classify;
mod local;
mod replay;
mod types;

pub use classify::{PacketSummary, classify};
pub use local::{LocalAddrs, detect_local_addr, first_external};
pub use replay::ReplaySource;
pub use types::PacketEvent;
