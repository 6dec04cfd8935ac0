//! 类别路由

use tracing::debug;

use crate::error::ConfigError;
use crate::led::Pixel;

use super::category::{CategoryEntry, CategoryTable};

#[derive(Debug, Clone, Default)]
pub struct CategoryRouter {
    table: CategoryTable,
}

impl CategoryRouter {
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    /// 返回 `(color, visible)`；未知类别返回 "Others" 条目。
    pub fn resolve(&self, category: &str) -> (Pixel, bool) {
        let CategoryEntry { color, visible } =
            *self.table.get(category).unwrap_or_else(|| self.table.others());
        (color, visible)
    }

    /// 只改一个类别的可见性（用于 `--suppress`）；颜色与其他条目不变。
    pub fn apply_override(&mut self, category: &str, visible: bool) -> Result<(), ConfigError> {
        self.table.set_visible(category, visible)?;
        debug!(category, visible, "类别可见性覆盖");
        Ok(())
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }
}
