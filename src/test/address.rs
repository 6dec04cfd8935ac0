use std::net::IpAddr;

use crate::display::MemorySink;
use crate::engine::{ADDRESS_SEPARATOR, Visualizer};
use crate::error::{AddressError, AppError};
use crate::led::{ADDRESS_PIXELS, Frame, Pixel, show_address};
use crate::router::CategoryRouter;
use crate::trail::TrailSweeper;

const ON: Pixel = Pixel::from_u32(0xFFFFFF);

fn lit(frame: &Frame) -> Vec<usize> {
    (0..frame.len())
        .filter(|&i| frame.get(i) == Some(ON))
        .collect()
}

#[test]
fn address_bits_are_msb_first_with_separators() {
    let mut frame = Frame::new(40);
    let ip: IpAddr = "192.168.1.10".parse().expect("ip");
    show_address(&mut frame, ip, ON, ADDRESS_SEPARATOR).expect("fits");

    // 192 = 11000000, 168 = 10101000, 1 = 00000001, 10 = 00001010
    assert_eq!(lit(&frame), vec![0, 1, 9, 11, 13, 25, 31, 33]);
    for sep in [8, 17, 26, 35] {
        assert_eq!(frame.get(sep), Some(ADDRESS_SEPARATOR));
    }
    assert!(frame.snapshot()[ADDRESS_PIXELS..].iter().all(|p| p.is_off()));
}

#[test]
fn short_strip_or_ipv6_is_rejected() {
    let mut frame = Frame::new(20);
    let v4: IpAddr = "10.0.0.1".parse().expect("ip");
    assert_eq!(
        show_address(&mut frame, v4, ON, ADDRESS_SEPARATOR),
        Err(AddressError::StripTooShort { len: 20, needed: 36 })
    );

    let mut frame = Frame::new(40);
    let v6: IpAddr = "::1".parse().expect("ip");
    assert_eq!(
        show_address(&mut frame, v6, ON, ADDRESS_SEPARATOR),
        Err(AddressError::NotIpv4(v6))
    );
}

#[test]
fn visualizer_renders_address_as_a_single_frame() {
    let sweeper = TrailSweeper::new(3, 1).expect("sweeper");
    let mut viz = Visualizer::new(CategoryRouter::default(), sweeper, MemorySink::new(36));
    viz.show_address("255.0.0.0".parse().expect("ip"))
        .expect("render");

    let frames = viz.sink().frames();
    assert_eq!(frames.len(), 1);
    assert!(frames[0][..8].iter().all(|&p| p == ON));
    assert_eq!(frames[0][8], ADDRESS_SEPARATOR);
    assert_eq!(viz.stats().frames, 1);

    let mut short = Visualizer::new(
        CategoryRouter::default(),
        TrailSweeper::new(3, 1).expect("sweeper"),
        MemorySink::new(10),
    );
    assert!(matches!(
        short.show_address("1.2.3.4".parse().expect("ip")),
        Err(AppError::Address(AddressError::StripTooShort { .. }))
    ));
}
