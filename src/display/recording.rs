//! 帧录制（用于离线回放/调试）
//!
//! 每次成功渲染记录一条 `{ frame, pixels }`，结束时整体写成 JSON 数组。

use serde::{Deserialize, Serialize};

use crate::error::HardwareError;
use crate::led::Pixel;

use super::DisplaySink;

/// 一帧：像素按 `0xAABBCC` 打包
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// 渲染序号（1 起）
    pub frame: usize,
    pub pixels: Vec<u32>,
}

/// 帧收集器（存内存，运行结束写 JSON 文件）
#[derive(Debug, Default)]
pub struct FrameLog {
    pub frames: Vec<FrameRecord>,
}

impl FrameLog {
    pub fn push(&mut self, pixels: &[Pixel]) {
        let frame = self.frames.len() + 1;
        self.frames.push(FrameRecord {
            frame,
            pixels: pixels.iter().map(|p| p.to_u32()).collect(),
        });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.frames)
    }
}

/// 在内层 sink 渲染成功后记录帧
#[derive(Debug)]
pub struct RecordingSink<S> {
    inner: S,
    shadow: Vec<Pixel>,
    log: Option<FrameLog>,
}

impl<S: DisplaySink> RecordingSink<S> {
    pub fn new(inner: S) -> Self {
        let shadow = vec![Pixel::OFF; inner.len()];
        Self {
            inner,
            shadow,
            log: Some(FrameLog::default()),
        }
    }

    /// 不录制，直接透传
    pub fn passthrough(inner: S) -> Self {
        Self {
            log: None,
            ..Self::new(inner)
        }
    }

    pub fn log(&self) -> Option<&FrameLog> {
        self.log.as_ref()
    }

    pub fn into_parts(self) -> (S, Option<FrameLog>) {
        (self.inner, self.log)
    }
}

impl<S: DisplaySink> DisplaySink for RecordingSink<S> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn set_pixel(&mut self, index: usize, color: Pixel) {
        self.inner.set_pixel(index, color);
        if self.log.is_some() {
            self.shadow[index] = color;
        }
    }

    fn render(&mut self) -> Result<(), HardwareError> {
        self.inner.render()?;
        if let Some(log) = self.log.as_mut() {
            log.push(&self.shadow);
        }
        Ok(())
    }

    fn clear_and_release(&mut self) {
        self.shadow.fill(Pixel::OFF);
        self.inner.clear_and_release();
    }
}
