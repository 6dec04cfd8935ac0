//! 渲染适配器

use tracing::error;

use crate::error::HardwareError;
use crate::led::Pixel;

use super::DisplaySink;

/// 把一帧逐像素写入 sink 再渲染。渲染失败时先清空输出，再把错误向上抛。
pub struct RenderDriver<'a, S: DisplaySink + ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: DisplaySink + ?Sized> RenderDriver<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    pub fn push(&mut self, pixels: &[Pixel]) -> Result<(), HardwareError> {
        for (index, &color) in pixels.iter().enumerate() {
            self.sink.set_pixel(index, color);
        }
        if let Err(err) = self.sink.render() {
            error!(%err, "渲染失败，清空灯带");
            self.sink.clear_and_release();
            return Err(err);
        }
        Ok(())
    }
}
