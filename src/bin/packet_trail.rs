//! 包拖尾可视化
//!
//! 读取逐行 JSON 的包事件（文件或标准输入），每个事件在灯带上扫过一条拖尾。

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use packet_trail::config::Config;
use packet_trail::display::{
    DisplaySink, FailAfter, FrameLog, MemorySink, RecordingSink, TerminalSink,
};
use packet_trail::engine::{Stats, Visualizer};
use packet_trail::error::{AddressError, AppError, ConfigError, EventError};
use packet_trail::event::ReplaySource;
use packet_trail::led::ChannelOrder;
use packet_trail::router::ColorCycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SinkKind {
    /// ANSI truecolor preview on stdout
    Terminal,
    /// Simulated strip, nothing is shown
    Memory,
}

#[derive(Debug, Parser)]
#[command(
    name = "packet-trail",
    about = "Sweep a color-coded trail across an LED strip for every packet event"
)]
struct Args {
    /// JSON config file; command line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON-lines event file, `-` for stdin
    #[arg(long, default_value = "-")]
    events: String,

    #[arg(long)]
    led_count: Option<usize>,

    #[arg(long)]
    trail_length: Option<usize>,

    /// Pixels advanced per frame
    #[arg(long)]
    step: Option<usize>,

    #[arg(long)]
    brightness: Option<u8>,

    /// Sleep between frames (ms); default renders as fast as the strip allows
    #[arg(long)]
    frame_delay_ms: Option<u64>,

    #[arg(long, value_enum)]
    channel_order: Option<ChannelOrder>,

    /// Hide a category (repeatable), e.g. `--suppress ARP`
    #[arg(long)]
    suppress: Vec<String>,

    /// Address of this host (repeatable); packets from it sweep forward
    #[arg(long)]
    local_addr: Vec<IpAddr>,

    /// Log the category of every event
    #[arg(long)]
    display: bool,

    /// Rotate through the built-in palette instead of category colors
    #[arg(long)]
    cycle_colors: bool,

    /// Show an IPv4 address as a bit pattern and exit; defaults to this host's address
    #[arg(long, num_args = 0..=1, value_name = "ADDR")]
    show_ip: Option<Option<IpAddr>>,

    #[arg(long, value_enum, default_value_t = SinkKind::Terminal)]
    sink: SinkKind,

    /// Write every rendered frame to this JSON file
    #[arg(long)]
    frames_json: Option<PathBuf>,

    /// Simulate a hardware failure on the n-th render (1-based)
    #[arg(long)]
    fail_at_frame: Option<usize>,
}

impl Args {
    fn config(&self) -> Result<Config, ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(v) = self.led_count {
            cfg.led_count = v;
        }
        if let Some(v) = self.trail_length {
            cfg.trail_length = v;
        }
        if let Some(v) = self.step {
            cfg.step = v;
        }
        if let Some(v) = self.brightness {
            cfg.brightness = v;
        }
        if self.frame_delay_ms.is_some() {
            cfg.frame_delay_ms = self.frame_delay_ms;
        }
        if let Some(v) = self.channel_order {
            cfg.channel_order = v;
        }
        cfg.suppress.extend(self.suppress.iter().cloned());
        cfg.local_addrs.extend(self.local_addr.iter().copied());
        cfg.display |= self.display;
        cfg.cycle_colors |= self.cycle_colors;
        cfg.validate()?;
        Ok(cfg)
    }
}

fn open_events(path: &str) -> Result<Box<dyn BufRead>, EventError> {
    if path == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

fn write_frames(path: &Path, log: &FrameLog) -> Result<(), AppError> {
    let output = |source: io::Error| AppError::Output {
        path: path.to_path_buf(),
        source,
    };
    let json = log.to_json().map_err(|e| output(io::Error::other(e)))?;
    fs::write(path, json).map_err(output)
}

fn run(args: &Args) -> Result<Stats, AppError> {
    let cfg = args.config()?;

    let mut sink: Box<dyn DisplaySink> = match args.sink {
        SinkKind::Terminal => Box::new(TerminalSink::new(
            io::stdout(),
            cfg.led_count,
            cfg.channel_order,
            cfg.brightness,
        )),
        SinkKind::Memory => Box::new(MemorySink::discarding(cfg.led_count)),
    };
    if let Some(n) = args.fail_at_frame {
        sink = Box::new(FailAfter::new(sink, n));
    }
    let sink = match args.frames_json {
        Some(_) => RecordingSink::new(sink),
        None => RecordingSink::passthrough(sink),
    };

    let mut viz = Visualizer::new(cfg.router()?, cfg.sweeper()?, sink)
        .with_display(cfg.display)
        .with_palette(cfg.cycle_colors.then(ColorCycle::default_palette));

    let result = match args.show_ip {
        Some(explicit) => explicit
            .or_else(|| cfg.primary_addr())
            .ok_or(AppError::Address(AddressError::NoLocalAddress))
            .and_then(|ip| viz.show_address(ip))
            .map(|()| viz.stats()),
        None => {
            let source = ReplaySource::new(open_events(&args.events)?, cfg.local());
            viz.run(source)
        }
    };

    // 失败时也把已渲染的帧写出来，便于排查
    if let (Some(path), (_, Some(log))) = (&args.frames_json, viz.into_sink().into_parts()) {
        write_frames(path, &log)?;
    }
    result
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(stats) => {
            println!(
                "done: events={}, rendered={}, suppressed={}, skipped={}, frames={}",
                stats.events, stats.rendered, stats.suppressed, stats.skipped, stats.frames
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
