use crate::led::Pixel;
use crate::trail::gradient;

#[test]
fn gradient_scales_each_channel_with_truncation() {
    let base = Pixel::from_u32(0x0000FF);
    assert_eq!(gradient(base, 1, 3), Pixel::new(0, 0, 85));
    assert_eq!(gradient(base, 2, 3), Pixel::new(0, 0, 170));
    assert_eq!(gradient(base, 3, 3), Pixel::new(0, 0, 255));

    let mixed = Pixel::new(0x88, 0xFF, 0x0A);
    assert_eq!(gradient(mixed, 1, 4), Pixel::new(0x22, 63, 2));
}

#[test]
fn single_pixel_trail_is_full_brightness() {
    let base = Pixel::from_u32(0x33FF99);
    assert_eq!(gradient(base, 1, 1), base);
}

#[test]
fn gradient_is_monotonic_and_reaches_base_at_head() {
    let bases = [0xFFFFFF, 0x0066CC, 0x88FF00, 0x010101, 0x000000];
    for &raw in &bases {
        let base = Pixel::from_u32(raw);
        for k in 1..=20 {
            let mut prev = [0u8; 3];
            for p in 1..=k {
                let ch = gradient(base, p, k).channels();
                for c in 0..3 {
                    assert!(ch[c] >= prev[c], "base={raw:#08x} k={k} p={p}");
                }
                prev = ch;
            }
            assert_eq!(gradient(base, k, k), base);
        }
    }
}

#[test]
#[should_panic(expected = "out of range")]
fn position_zero_is_rejected() {
    gradient(Pixel::from_u32(0xFFFFFF), 0, 3);
}

#[test]
#[should_panic(expected = "out of range")]
fn position_past_head_is_rejected() {
    gradient(Pixel::from_u32(0xFFFFFF), 4, 3);
}
