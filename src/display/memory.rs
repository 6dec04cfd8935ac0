//! 内存模拟灯带
//!
//! 不接硬件，记录每一次渲染的帧。测试与无硬件运行都用它。

use crate::error::HardwareError;
use crate::led::Pixel;

use super::DisplaySink;

#[derive(Debug, Clone)]
pub struct MemorySink {
    current: Vec<Pixel>,
    history: Option<Vec<Vec<Pixel>>>,
    renders: usize,
    clears: usize,
}

impl MemorySink {
    /// 保留所有已渲染帧
    pub fn new(len: usize) -> Self {
        Self {
            current: vec![Pixel::OFF; len],
            history: Some(Vec::new()),
            renders: 0,
            clears: 0,
        }
    }

    /// 只保留当前缓冲，不记录历史
    pub fn discarding(len: usize) -> Self {
        Self {
            history: None,
            ..Self::new(len)
        }
    }

    pub fn current(&self) -> &[Pixel] {
        &self.current
    }

    pub fn frames(&self) -> &[Vec<Pixel>] {
        self.history.as_deref().unwrap_or(&[])
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl DisplaySink for MemorySink {
    fn len(&self) -> usize {
        self.current.len()
    }

    fn set_pixel(&mut self, index: usize, color: Pixel) {
        self.current[index] = color;
    }

    fn render(&mut self) -> Result<(), HardwareError> {
        self.renders += 1;
        if let Some(history) = self.history.as_mut() {
            history.push(self.current.clone());
        }
        Ok(())
    }

    fn clear_and_release(&mut self) {
        self.clears += 1;
        self.current.fill(Pixel::OFF);
    }
}
