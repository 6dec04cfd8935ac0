//! 循环调色板
//!
//! 按固定顺序无限轮换颜色，每次扫描取下一个。

use crate::error::ConfigError;
use crate::led::Pixel;

pub const DEFAULT_PALETTE: &[u32] = &[
    0xFFFFFF, 0x880000, 0x00FF00, 0x0000FF, 0x0066CC, 0x33FF99, 0xFFFF00, 0x88FF00, 0xFF00FF,
    0xFF0000,
];

#[derive(Debug, Clone)]
pub struct ColorCycle {
    colors: Vec<Pixel>,
    pos: usize,
}

impl ColorCycle {
    pub fn new(colors: Vec<Pixel>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors, pos: 0 })
    }

    pub fn default_palette() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().copied().map(Pixel::from_u32).collect(),
            pos: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Iterator for ColorCycle {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        let color = self.colors[self.pos];
        self.pos = (self.pos + 1) % self.colors.len();
        Some(color)
    }
}
