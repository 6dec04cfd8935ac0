//! 像素颜色
//!
//! 24 位颜色拆成三个 8 位通道。通道顺序跟随灯带接线，不一定是字面上的 RGB。

use serde::{Deserialize, Serialize};
use smart_leds::RGB8;

/// 一个像素：三个独立的 0..=255 强度（不做 gamma 校正）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub a: u8,
    pub b: u8,
    pub c: u8,
}

impl Pixel {
    pub const OFF: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(a: u8, b: u8, c: u8) -> Pixel {
        Pixel { a, b, c }
    }

    /// 从 `0xAABBCC` 形式的打包值构造，高 8 位忽略。
    pub const fn from_u32(v: u32) -> Pixel {
        Pixel {
            a: ((v >> 16) & 0xFF) as u8,
            b: ((v >> 8) & 0xFF) as u8,
            c: (v & 0xFF) as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 16) | ((self.b as u32) << 8) | self.c as u32
    }

    pub fn channels(self) -> [u8; 3] {
        [self.a, self.b, self.c]
    }

    pub fn is_off(self) -> bool {
        self == Pixel::OFF
    }

    /// 解析 `0x00ff00`、`#00ff00` 或 `00ff00`。
    pub fn parse_hex(s: &str) -> Option<Pixel> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .or_else(|| s.strip_prefix('#'))
            .unwrap_or(s);
        if digits.is_empty() || digits.len() > 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Pixel::from_u32)
    }
}

impl From<u32> for Pixel {
    fn from(v: u32) -> Self {
        Pixel::from_u32(v)
    }
}

/// 通道 A/B/C 与真实 R/G/B 的对应关系。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ChannelOrder {
    Rgb,
    /// WS281x 的接线顺序：A = 绿，B = 红，C = 蓝
    #[default]
    Grb,
}

impl ChannelOrder {
    pub fn to_rgb8(self, p: Pixel) -> RGB8 {
        match self {
            ChannelOrder::Rgb => RGB8::new(p.a, p.b, p.c),
            ChannelOrder::Grb => RGB8::new(p.b, p.a, p.c),
        }
    }
}
