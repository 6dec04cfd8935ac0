//! 事件循环
//!
//! 事件逐个处理：类别路由 -> （可见时）完整扫描一次 -> 下一个事件。
//! 扫描期间不处理其他事件，也不排队。渲染失败对当前扫描和整个循环都是致命的。

use std::net::IpAddr;

use tracing::{debug, error, info, warn};

use crate::display::{DisplaySink, RenderDriver};
use crate::error::{AppError, EventError, HardwareError};
use crate::event::PacketEvent;
use crate::led::{Frame, Pixel, show_address};
use crate::router::{ANOMALY, CategoryRouter, ColorCycle, OTHERS};
use crate::trail::TrailSweeper;

/// 地址图案中分隔像素的颜色
pub const ADDRESS_SEPARATOR: Pixel = Pixel::from_u32(0x880000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered { frames: usize },
    Suppressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub events: u64,
    pub rendered: u64,
    pub suppressed: u64,
    pub frames: u64,
    /// 回放中被跳过的坏行
    pub skipped: u64,
}

pub struct Visualizer<S: DisplaySink> {
    router: CategoryRouter,
    sweeper: TrailSweeper,
    frame: Frame,
    sink: S,
    palette: Option<ColorCycle>,
    display: bool,
    stats: Stats,
}

impl<S: DisplaySink> Visualizer<S> {
    /// 帧长度取 sink 的像素数
    pub fn new(router: CategoryRouter, sweeper: TrailSweeper, sink: S) -> Self {
        let frame = Frame::new(sink.len());
        Self {
            router,
            sweeper,
            frame,
            sink,
            palette: None,
            display: false,
            stats: Stats::default(),
        }
    }

    /// 每个事件输出一行类别日志
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// 用循环调色板代替类别颜色（可见性仍由类别决定）
    pub fn with_palette(mut self, palette: Option<ColorCycle>) -> Self {
        self.palette = palette;
        self
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn router(&self) -> &CategoryRouter {
        &self.router
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    #[tracing::instrument(skip(self, event), fields(category = %event.category, direction = ?event.direction))]
    pub fn handle(&mut self, event: &PacketEvent) -> Result<Outcome, HardwareError> {
        self.stats.events += 1;
        if self.display {
            info!("{}", event.category);
        }
        if event.category == ANOMALY {
            warn!("⚠️  ANOMALY");
        }

        let (color, visible) = self.router.resolve(&event.category);
        if !visible {
            debug!("类别已屏蔽");
            self.stats.suppressed += 1;
            return Ok(Outcome::Suppressed);
        }
        let color = match self.palette.as_mut() {
            Some(palette) => palette.next().unwrap_or(color),
            None => color,
        };

        let mut driver = RenderDriver::new(&mut self.sink);
        let frames = self
            .sweeper
            .sweep(&mut self.frame, color, event.direction, &mut driver)?;
        self.stats.rendered += 1;
        self.stats.frames += frames as u64;
        Ok(Outcome::Rendered { frames })
    }

    /// 消费事件直到源结束。坏行记日志后跳过；读错误和渲染错误立即返回。
    pub fn run<I>(&mut self, source: I) -> Result<Stats, AppError>
    where
        I: IntoIterator<Item = Result<PacketEvent, EventError>>,
    {
        info!("▶️  开始处理事件");
        for item in source {
            let event = match item {
                Ok(event) => event,
                Err(err @ EventError::Malformed { .. }) => {
                    warn!(%err, "跳过无法解析的事件");
                    self.stats.skipped += 1;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if let Err(err) = self.handle(&event) {
                error!(%err, "渲染失败，终止");
                return Err(err.into());
            }
        }
        info!(
            events = self.stats.events,
            rendered = self.stats.rendered,
            suppressed = self.stats.suppressed,
            frames = self.stats.frames,
            "✅ 事件源结束"
        );
        Ok(self.stats)
    }

    /// 在灯带上显示一个 IPv4 地址（亮位用 "Others" 的颜色）
    pub fn show_address(&mut self, ip: IpAddr) -> Result<(), AppError> {
        let (on, _) = self.router.resolve(OTHERS);
        show_address(&mut self.frame, ip, on, ADDRESS_SEPARATOR)?;
        RenderDriver::new(&mut self.sink).push(self.frame.snapshot())?;
        self.stats.frames += 1;
        Ok(())
    }
}
