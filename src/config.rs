//! 运行配置
//!
//! JSON 文件 + 命令行覆盖。所有字段都有默认值，缺省即原始硬件的参数
//! （144 颗灯、拖尾 12、步长 4、亮度 50）。

use std::collections::BTreeMap;
use std::fs;
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::event::{LocalAddrs, detect_local_addr};
use crate::led::{ChannelOrder, Pixel};
use crate::router::{CategoryRouter, CategoryTable};
use crate::trail::TrailSweeper;

pub const DEFAULT_LED_COUNT: usize = 144;
pub const DEFAULT_TRAIL_LENGTH: usize = 12;
pub const DEFAULT_STEP: usize = 4;
pub const DEFAULT_BRIGHTNESS: u8 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub led_count: usize,
    pub trail_length: usize,
    /// 每帧前进的像素数，越大越快越跳
    pub step: usize,
    pub brightness: u8,
    pub frame_delay_ms: Option<u64>,
    pub channel_order: ChannelOrder,
    /// 不显示的类别
    pub suppress: Vec<String>,
    /// 类别 -> 十六进制颜色，仅在启动时生效
    pub colors: BTreeMap<String, String>,
    pub local_addrs: Vec<IpAddr>,
    /// 每个事件打印一行类别
    pub display: bool,
    /// 忽略类别颜色，每次扫描轮换调色板
    pub cycle_colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            trail_length: DEFAULT_TRAIL_LENGTH,
            step: DEFAULT_STEP,
            brightness: DEFAULT_BRIGHTNESS,
            frame_delay_ms: None,
            channel_order: ChannelOrder::default(),
            suppress: Vec::new(),
            colors: BTreeMap::new(),
            local_addrs: Vec::new(),
            display: false,
            cycle_colors: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Config, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.led_count == 0 {
            return Err(ConfigError::Zero { field: "led_count" });
        }
        self.sweeper()?;
        self.router()?;
        Ok(())
    }

    pub fn frame_delay(&self) -> Option<Duration> {
        self.frame_delay_ms.map(Duration::from_millis)
    }

    pub fn sweeper(&self) -> Result<TrailSweeper, ConfigError> {
        Ok(TrailSweeper::new(self.trail_length, self.step)?.with_frame_delay(self.frame_delay()))
    }

    /// 默认类别表叠加颜色覆盖
    pub fn category_table(&self) -> Result<CategoryTable, ConfigError> {
        let mut table = CategoryTable::with_defaults();
        for (category, value) in &self.colors {
            let color = Pixel::parse_hex(value).ok_or_else(|| ConfigError::InvalidColor {
                value: value.clone(),
            })?;
            table.set_color(category, color)?;
        }
        Ok(table)
    }

    pub fn router(&self) -> Result<CategoryRouter, ConfigError> {
        let mut router = CategoryRouter::new(self.category_table()?);
        for category in &self.suppress {
            router.apply_override(category, false)?;
        }
        Ok(router)
    }

    /// 配置了本机地址就用配置，否则调用 `detect` 探测一次
    pub fn local_addrs_or(&self, detect: impl FnOnce() -> Option<IpAddr>) -> Vec<IpAddr> {
        if !self.local_addrs.is_empty() {
            return self.local_addrs.clone();
        }
        detect().into_iter().collect()
    }

    /// 方向判定用的本机地址集合（未配置时探测主机网卡）
    pub fn local(&self) -> LocalAddrs {
        LocalAddrs::new(self.local_addrs_or(detect_local_addr))
    }

    /// `--show-ip` 未给地址时显示的地址
    pub fn primary_addr(&self) -> Option<IpAddr> {
        self.local_addrs_or(detect_local_addr)
            .into_iter()
            .find(IpAddr::is_ipv4)
    }
}
