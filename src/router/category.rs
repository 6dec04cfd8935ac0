//! 类别表
//!
//! 颜色按灯带接线顺序（GRB）打包。

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::led::Pixel;

pub const ANOMALY: &str = "Anomaly";
pub const LLDP: &str = "LLDP";
pub const DNS: &str = "DNS";
pub const ICMPV4: &str = "ICMPv4";
pub const ICMPV6: &str = "ICMPv6";
pub const DHCPV4: &str = "DHCPv4";
pub const ARP: &str = "ARP";
pub const IGMP: &str = "IGMP";
pub const UDP: &str = "UDP";
pub const TCP: &str = "TCP";
/// 兜底类别，表中始终存在
pub const OTHERS: &str = "Others";

const DEFAULTS: &[(&str, u32)] = &[
    (OTHERS, 0xFFFFFF),
    (ANOMALY, 0x00FF00),
    (LLDP, 0xFFFFFF),
    (DNS, 0xFF0000),
    (ICMPV4, 0x33FF99),
    (ICMPV6, 0x33FF99),
    (DHCPV4, 0xFF00FF),
    (ARP, 0x88FF00),
    (IGMP, 0x0066CC),
    (UDP, 0xFFFF00),
    (TCP, 0x0000FF),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub color: Pixel,
    pub visible: bool,
}

impl CategoryEntry {
    pub fn visible(color: Pixel) -> Self {
        Self {
            color,
            visible: true,
        }
    }
}

/// 类别 -> 条目。只能增改，不能删除，因此 `OTHERS` 一旦放入就一直在。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: BTreeMap<String, CategoryEntry>,
}

impl CategoryTable {
    /// 只含兜底条目的表
    pub fn new(others: CategoryEntry) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(OTHERS.to_string(), others);
        Self { entries }
    }

    pub fn with_defaults() -> Self {
        let mut table = Self::new(CategoryEntry::visible(Pixel::from_u32(DEFAULTS[0].1)));
        for &(name, color) in &DEFAULTS[1..] {
            table.insert(name, CategoryEntry::visible(Pixel::from_u32(color)));
        }
        table
    }

    pub fn insert(&mut self, category: impl Into<String>, entry: CategoryEntry) {
        self.entries.insert(category.into(), entry);
    }

    pub fn get(&self, category: &str) -> Option<&CategoryEntry> {
        self.entries.get(category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    pub fn others(&self) -> &CategoryEntry {
        self.entries
            .get(OTHERS)
            .expect("category table always holds the Others entry")
    }

    /// 启动时修改某个已知类别的颜色
    pub fn set_color(&mut self, category: &str, color: Pixel) -> Result<(), ConfigError> {
        let entry = self
            .entries
            .get_mut(category)
            .ok_or_else(|| ConfigError::UnknownCategory(category.to_string()))?;
        entry.color = color;
        Ok(())
    }

    pub fn set_visible(&mut self, category: &str, visible: bool) -> Result<(), ConfigError> {
        let entry = self
            .entries
            .get_mut(category)
            .ok_or_else(|| ConfigError::UnknownCategory(category.to_string()))?;
        entry.visible = visible;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}
