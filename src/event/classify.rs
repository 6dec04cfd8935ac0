//! 包分类
//!
//! 按固定优先级把包的协议层摘要映射到类别标签：
//! Anomaly > LLDP > DNS > ICMPv4 > ICMPv6 > DHCPv4 > ARP > IGMP > UDP > TCP > Others。

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::router::{ANOMALY, ARP, DHCPV4, DNS, ICMPV4, ICMPV6, IGMP, LLDP, OTHERS, TCP, UDP};

use super::local::LocalAddrs;
use super::types::PacketEvent;

/// 抓包侧给出的包摘要
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketSummary {
    /// 网络层源地址（非 IP 包为空）
    #[serde(default)]
    pub src: Option<IpAddr>,
    /// 协议层名，如 `["ethernet", "ipv4", "tcp"]`，大小写不敏感
    #[serde(default)]
    pub layers: Vec<String>,
    /// TCP 标志位，如 `["FIN", "PSH"]`
    #[serde(default)]
    pub tcp_flags: Vec<String>,
}

impl PacketSummary {
    pub fn has_layer(&self, name: &str) -> bool {
        self.layers.iter().any(|l| l.eq_ignore_ascii_case(name))
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.tcp_flags.iter().any(|f| f.eq_ignore_ascii_case(flag))
    }

    /// FIN + URG + PSH 同时置位的 TCP 包（Xmas 扫描一类）
    pub fn is_anomaly(&self) -> bool {
        self.has_layer("tcp") && ["fin", "urg", "psh"].iter().all(|f| self.has_flag(f))
    }

    pub fn to_event(&self, local: &LocalAddrs) -> PacketEvent {
        PacketEvent::new(classify(self), local.direction_for(self.src))
    }
}

pub fn classify(pkt: &PacketSummary) -> &'static str {
    if pkt.is_anomaly() {
        return ANOMALY;
    }
    const LADDER: &[(&str, &str)] = &[
        ("lldp", LLDP),
        ("dns", DNS),
        ("icmpv4", ICMPV4),
        ("icmpv6", ICMPV6),
        ("dhcpv4", DHCPV4),
        ("arp", ARP),
        ("igmp", IGMP),
        ("udp", UDP),
        ("tcp", TCP),
    ];
    LADDER
        .iter()
        .find(|(layer, _)| pkt.has_layer(layer))
        .map_or(OTHERS, |&(_, category)| category)
}
