//! LED 灯带模块
//!
//! 此模块包含像素颜色、帧缓冲以及地址图案等与灯带本身相关的类型。

// 子模块声明
mod address;
mod frame;
mod pixel;

// 重新导出公共接口
pub use address::{ADDRESS_PIXELS, show_address};
pub use frame::Frame;
pub use pixel::{ChannelOrder, Pixel};
