//! 拖尾扫描
//!
//! 一次扫描：头部从第 0 个像素进入，按固定步长前进，直到整条拖尾离开灯带。
//! 每一步清空帧、画拖尾、按需翻转，然后交给渲染适配器。

use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use crate::display::{DisplaySink, RenderDriver};
use crate::error::{ConfigError, HardwareError};
use crate::led::{Frame, Pixel};

use super::direction::Direction;
use super::gradient::gradient;

#[derive(Debug, Clone)]
pub struct TrailSweeper {
    trail_length: usize,
    step: usize,
    frame_delay: Option<Duration>,
}

impl TrailSweeper {
    pub fn new(trail_length: usize, step: usize) -> Result<Self, ConfigError> {
        if trail_length == 0 {
            return Err(ConfigError::Zero {
                field: "trail_length",
            });
        }
        if step == 0 {
            return Err(ConfigError::Zero { field: "step" });
        }
        Ok(Self {
            trail_length,
            step,
            frame_delay: None,
        })
    }

    /// 每帧之后固定休眠（早期版本的节奏控制方式；默认不休眠）
    pub fn with_frame_delay(mut self, delay: Option<Duration>) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn trail_length(&self) -> usize {
        self.trail_length
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// 实际步长。步长超过拖尾长度时会跳过像素，因此截到拖尾长度。
    pub fn effective_step(&self) -> usize {
        self.step.min(self.trail_length)
    }

    /// 一次扫描中拖尾尾部（最暗像素）的所有偏移。
    ///
    /// 从 `-(k-1)` 开始，到 `N + k + step` 之前结束，保证最后几帧整条拖尾都已离开。
    pub fn offsets(&self, led_count: usize) -> impl Iterator<Item = isize> + use<> {
        let k = self.trail_length as isize;
        let step = self.effective_step();
        let end = led_count as isize + k + step as isize;
        (-(k - 1)..end).step_by(step)
    }

    pub fn frame_count(&self, led_count: usize) -> usize {
        self.offsets(led_count).count()
    }

    /// 在 `offset` 处画一帧。
    pub fn paint(&self, frame: &mut Frame, offset: isize, color: Pixel, direction: Direction) {
        frame.clear();
        let len = frame.len() as isize;
        for j in 0..self.trail_length {
            let t = offset + j as isize;
            if (0..len).contains(&t) {
                frame.set(t as usize, gradient(color, j + 1, self.trail_length));
            }
        }
        if direction.is_reverse() {
            frame.reverse();
        }
    }

    /// 完整扫描一次。渲染失败立即中止，剩余帧不再推送。返回已渲染的帧数。
    #[tracing::instrument(skip(self, frame, driver), fields(led_count = frame.len()))]
    pub fn sweep<S: DisplaySink + ?Sized>(
        &self,
        frame: &mut Frame,
        color: Pixel,
        direction: Direction,
        driver: &mut RenderDriver<'_, S>,
    ) -> Result<usize, HardwareError> {
        let mut rendered = 0;
        for offset in self.offsets(frame.len()) {
            self.paint(frame, offset, color, direction);
            trace!(offset, "推送帧");
            driver.push(frame.snapshot())?;
            rendered += 1;
            if let Some(delay) = self.frame_delay {
                thread::sleep(delay);
            }
        }
        debug!(rendered, "扫描完成");
        Ok(rendered)
    }
}
