//! 类别路由模块
//!
//! 把事件类别映射到（颜色、是否显示）。未知类别落到 "Others"。

mod category;
mod palette;
mod lookup;

pub use category::{
    ANOMALY, ARP, CategoryEntry, CategoryTable, DHCPV4, DNS, ICMPV4, ICMPV6, IGMP, LLDP, OTHERS,
    TCP, UDP,
};
pub use palette::{ColorCycle, DEFAULT_PALETTE};
pub use lookup::CategoryRouter;
