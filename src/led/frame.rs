//! 帧缓冲
//!
//! 长度在初始化时固定的像素序列，每个动画步骤原地修改。

use super::pixel::Pixel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<Pixel>,
}

impl Frame {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Pixel::OFF; len],
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// 所有像素置零
    pub fn clear(&mut self) {
        self.pixels.fill(Pixel::OFF);
    }

    /// 写一个像素。越界是调用方的逻辑错误，直接 panic，不做截断。
    pub fn set(&mut self, index: usize, color: Pixel) {
        assert!(
            index < self.pixels.len(),
            "pixel index {index} out of range for strip of {}",
            self.pixels.len()
        );
        self.pixels[index] = color;
    }

    pub fn get(&self, index: usize) -> Option<Pixel> {
        self.pixels.get(index).copied()
    }

    /// 当前帧内容（用于交给渲染适配器）
    pub fn snapshot(&self) -> &[Pixel] {
        &self.pixels
    }

    /// 整帧首尾翻转：`[0..N-1]` 变为 `[N-1..0]`
    pub fn reverse(&mut self) {
        self.pixels.reverse();
    }
}
