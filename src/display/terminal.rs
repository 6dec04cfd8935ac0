//! 终端预览
//!
//! 每帧输出一行 truecolor ANSI 方块，方便没有灯带时观察动画。

use std::io::Write;

use smart_leds::{RGB8, brightness};

use crate::error::HardwareError;
use crate::led::{ChannelOrder, Pixel};

use super::DisplaySink;

pub struct TerminalSink<W: Write> {
    out: W,
    buf: Vec<Pixel>,
    order: ChannelOrder,
    brightness: u8,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, len: usize, order: ChannelOrder, brightness: u8) -> Self {
        Self {
            out,
            buf: vec![Pixel::OFF; len],
            order,
            brightness,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&self) -> String {
        let order = self.order;
        let colors = self.buf.iter().map(move |&p| order.to_rgb8(p));
        let mut line = String::with_capacity(self.buf.len() * 20);
        for RGB8 { r, g, b } in brightness(colors, self.brightness) {
            if r == 0 && g == 0 && b == 0 {
                line.push(' ');
            } else {
                line.push_str(&format!("\x1b[38;2;{r};{g};{b}m█"));
            }
        }
        line.push_str("\x1b[0m");
        line
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn len(&self) -> usize {
        self.buf.len()
    }

    fn set_pixel(&mut self, index: usize, color: Pixel) {
        self.buf[index] = color;
    }

    fn render(&mut self) -> Result<(), HardwareError> {
        let line = self.line();
        writeln!(self.out, "{line}")
            .and_then(|()| self.out.flush())
            .map_err(|e| HardwareError::new(e.to_string()))
    }

    fn clear_and_release(&mut self) {
        self.buf.fill(Pixel::OFF);
        let _ = write!(self.out, "\x1b[0m");
        let _ = self.out.flush();
    }
}
