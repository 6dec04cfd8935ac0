//! IPv4 地址图案
//!
//! 把本机地址按位显示在灯带上：每个字节 8 个像素（高位在前），后跟 1 个分隔像素。

use std::net::IpAddr;

use crate::error::AddressError;

use super::frame::Frame;
use super::pixel::Pixel;

/// 显示一个 IPv4 地址所需的像素数（4 × 9）
pub const ADDRESS_PIXELS: usize = 4 * 9;

pub fn show_address(
    frame: &mut Frame,
    ip: IpAddr,
    on: Pixel,
    separator: Pixel,
) -> Result<(), AddressError> {
    let IpAddr::V4(v4) = ip else {
        return Err(AddressError::NotIpv4(ip));
    };
    if frame.len() < ADDRESS_PIXELS {
        return Err(AddressError::StripTooShort {
            len: frame.len(),
            needed: ADDRESS_PIXELS,
        });
    }

    frame.clear();
    for (i, octet) in v4.octets().into_iter().enumerate() {
        for j in 0..8 {
            if (octet >> (7 - j)) & 1 == 1 {
                frame.set(i * 9 + j, on);
            }
        }
        frame.set((i + 1) * 9 - 1, separator);
    }
    Ok(())
}
