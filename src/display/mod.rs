//! 显示输出模块
//!
//! `DisplaySink` 是与硬件之间唯一的边界；`RenderDriver` 把一帧转成对它的调用。
//! 目前提供内存模拟、终端预览、smart-leds 硬件三种后端，以及录制和故障注入包装。

use crate::error::HardwareError;
use crate::led::Pixel;

mod driver;
mod fault;
mod memory;
mod recording;
mod smart;
mod terminal;

pub use driver::RenderDriver;
pub use fault::FailAfter;
pub use memory::MemorySink;
pub use recording::{FrameLog, FrameRecord, RecordingSink};
pub use smart::SmartLedsSink;
pub use terminal::TerminalSink;

/// 灯带输出抽象
pub trait DisplaySink {
    /// 灯带像素数
    fn len(&self) -> usize;
    /// 写入一个像素（在下一次 `render` 时生效）
    fn set_pixel(&mut self, index: usize, color: Pixel);
    /// 把当前缓冲推到灯带上
    fn render(&mut self) -> Result<(), HardwareError>;
    /// 尽力清空输出（失败时调用，不再报告错误）
    fn clear_and_release(&mut self);
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn set_pixel(&mut self, index: usize, color: Pixel) {
        (**self).set_pixel(index, color);
    }

    fn render(&mut self) -> Result<(), HardwareError> {
        (**self).render()
    }

    fn clear_and_release(&mut self) {
        (**self).clear_and_release();
    }
}
