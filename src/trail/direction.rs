//! 拖尾方向

use serde::{Deserialize, Serialize};

/// `Forward`：从本机流出；`Reverse`：流向本机。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    #[default]
    Reverse,
}

impl Direction {
    pub fn is_reverse(self) -> bool {
        matches!(self, Direction::Reverse)
    }
}
