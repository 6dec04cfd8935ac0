//! 渐变着色
//!
//! 长度为 `k` 的拖尾中，第 `p` 个位置（1 起，`k` 为头部）的颜色为
//! `channel * p / k`，三个通道同样做整数截断除法。

use crate::led::Pixel;

pub fn gradient(base: Pixel, p: usize, k: usize) -> Pixel {
    assert!(
        k >= 1 && (1..=k).contains(&p),
        "trail position {p} out of range for trail of length {k}"
    );
    let scale = |ch: u8| (u64::from(ch) * p as u64 / k as u64) as u8;
    Pixel::new(scale(base.a), scale(base.b), scale(base.c))
}
