use serde::{Deserialize, Serialize};

use crate::trail::Direction;

/// 一个已分类的事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketEvent {
    pub category: String,
    #[serde(default)]
    pub direction: Direction,
}

impl PacketEvent {
    pub fn new(category: impl Into<String>, direction: Direction) -> Self {
        Self {
            category: category.into(),
            direction,
        }
    }
}
