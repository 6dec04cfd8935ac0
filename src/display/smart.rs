//! smart-leds 硬件后端
//!
//! 适配任何实现 `SmartLedsWrite<Color = RGB8>` 的驱动（WS2812 SPI/PWM 等）。

use std::fmt::Debug;
use std::iter::repeat_n;

use smart_leds::{RGB8, SmartLedsWrite, brightness};

use crate::error::HardwareError;
use crate::led::{ChannelOrder, Pixel};

use super::DisplaySink;

pub struct SmartLedsSink<W> {
    strip: W,
    buf: Vec<Pixel>,
    order: ChannelOrder,
    brightness: u8,
}

impl<W> SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    pub fn new(strip: W, len: usize, order: ChannelOrder, brightness: u8) -> Self {
        Self {
            strip,
            buf: vec![Pixel::OFF; len],
            order,
            brightness,
        }
    }

    pub fn strip(&self) -> &W {
        &self.strip
    }
}

impl<W> DisplaySink for SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    fn len(&self) -> usize {
        self.buf.len()
    }

    fn set_pixel(&mut self, index: usize, color: Pixel) {
        self.buf[index] = color;
    }

    fn render(&mut self) -> Result<(), HardwareError> {
        let order = self.order;
        let colors = self.buf.iter().map(move |&p| order.to_rgb8(p));
        self.strip
            .write(brightness(colors, self.brightness))
            .map_err(|e| HardwareError::new(format!("{e:?}")))
    }

    fn clear_and_release(&mut self) {
        self.buf.fill(Pixel::OFF);
        let _ = self.strip.write(repeat_n(RGB8::default(), self.buf.len()));
    }
}
