//! 拖尾动画模块
//!
//! 给定（颜色、方向），生成一次完整扫过灯带的帧序列：
//! 渐变着色、扫描边界与方向翻转都在这里。

// 子模块声明
mod direction;
mod gradient;
mod sweep;

// 重新导出公共接口
pub use direction::Direction;
pub use gradient::gradient;
pub use sweep::TrailSweeper;
