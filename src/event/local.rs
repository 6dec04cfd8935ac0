//! 本机地址集合
//!
//! 启动时解析一次；每个包只做成员判断。

use std::collections::BTreeSet;
use std::net::IpAddr;

use tracing::{debug, warn};

use crate::trail::Direction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalAddrs {
    addrs: BTreeSet<IpAddr>,
}

impl LocalAddrs {
    pub fn new(addrs: impl IntoIterator<Item = IpAddr>) -> Self {
        Self {
            addrs: addrs.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, addr: IpAddr) {
        self.addrs.insert(addr);
    }

    pub fn contains(&self, addr: &IpAddr) -> bool {
        self.addrs.contains(addr)
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// 源地址是本机 -> `Forward`；否则（包括没有网络层地址）-> `Reverse`。
    pub fn direction_for(&self, src: Option<IpAddr>) -> Direction {
        match src {
            Some(addr) if self.contains(&addr) => Direction::Forward,
            _ => Direction::Reverse,
        }
    }
}

/// 第一个非回环 IPv4 地址（保持接口枚举顺序，eth0 通常排在 wlan0 前面）
pub fn first_external(addrs: impl IntoIterator<Item = IpAddr>) -> Option<IpAddr> {
    addrs
        .into_iter()
        .find(|ip| ip.is_ipv4() && !ip.is_loopback())
}

/// 枚举主机网卡，取第一个非回环 IPv4 地址。没有联网或枚举失败时返回 `None`。
pub fn detect_local_addr() -> Option<IpAddr> {
    let ifaces = match if_addrs::get_if_addrs() {
        Ok(ifaces) => ifaces,
        Err(err) => {
            warn!(%err, "无法枚举网卡");
            return None;
        }
    };
    let found = first_external(
        ifaces
            .iter()
            .filter(|iface| !iface.is_loopback())
            .map(|iface| iface.ip()),
    );
    match found {
        Some(ip) => debug!(%ip, "探测到本机地址"),
        None => warn!("没有找到非回环 IPv4 地址，是否已联网？"),
    }
    found
}
