//! 故障注入
//!
//! 包装任意 sink，从第 `n` 次渲染（1 起）开始返回硬件错误。

use crate::error::HardwareError;
use crate::led::Pixel;

use super::DisplaySink;

#[derive(Debug)]
pub struct FailAfter<S> {
    inner: S,
    fail_at: usize,
    attempts: usize,
}

impl<S: DisplaySink> FailAfter<S> {
    pub fn new(inner: S, fail_at: usize) -> Self {
        Self {
            inner,
            fail_at,
            attempts: 0,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: DisplaySink> DisplaySink for FailAfter<S> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn set_pixel(&mut self, index: usize, color: Pixel) {
        self.inner.set_pixel(index, color);
    }

    fn render(&mut self) -> Result<(), HardwareError> {
        self.attempts += 1;
        if self.attempts >= self.fail_at {
            return Err(HardwareError::new(format!(
                "simulated failure on frame {}",
                self.attempts
            )));
        }
        self.inner.render()
    }

    fn clear_and_release(&mut self) {
        self.inner.clear_and_release();
    }
}
