use smart_leds::{RGB8, SmartLedsWrite};

use crate::display::{
    DisplaySink, FailAfter, MemorySink, RecordingSink, RenderDriver, SmartLedsSink, TerminalSink,
};
use crate::led::{ChannelOrder, Pixel};

#[derive(Default)]
struct MockStrip {
    writes: Vec<Vec<RGB8>>,
    fail: bool,
}

impl SmartLedsWrite for MockStrip {
    type Error = &'static str;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.fail {
            return Err("spi bus gone");
        }
        self.writes.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

#[test]
fn driver_forwards_pixels_and_renders() {
    let mut sink = MemorySink::new(3);
    let pixels = [Pixel::from_u32(0x0000FF), Pixel::OFF, Pixel::from_u32(0xFF0000)];
    RenderDriver::new(&mut sink).push(&pixels).expect("render");
    assert_eq!(sink.renders(), 1);
    assert_eq!(sink.frames(), &[pixels.to_vec()]);
    assert_eq!(sink.clears(), 0);
}

#[test]
fn driver_clears_once_on_failure() {
    let mut sink = FailAfter::new(MemorySink::new(2), 1);
    let pixels = [Pixel::from_u32(0xFFFFFF); 2];
    let err = RenderDriver::new(&mut sink)
        .push(&pixels)
        .expect_err("first render fails");
    assert!(err.to_string().starts_with("render failed"));
    assert_eq!(sink.inner().clears(), 1);
    assert_eq!(sink.inner().renders(), 0);
}

#[test]
fn discarding_memory_sink_keeps_no_history() {
    let mut sink = MemorySink::discarding(2);
    sink.set_pixel(1, Pixel::from_u32(0x00FF00));
    sink.render().expect("render");
    assert_eq!(sink.renders(), 1);
    assert!(sink.frames().is_empty());
    assert_eq!(sink.current()[1], Pixel::new(0, 255, 0));
}

#[test]
fn recording_sink_logs_only_successful_renders() {
    let mut sink = RecordingSink::new(FailAfter::new(MemorySink::new(2), 3));
    for v in [0x01, 0x02, 0x03] {
        sink.set_pixel(0, Pixel::from_u32(v));
        let _ = sink.render();
    }
    let (inner, log) = sink.into_parts();
    let log = log.expect("recording enabled");
    assert_eq!(log.frames.len(), 2);
    assert_eq!(log.frames[0].frame, 1);
    assert_eq!(log.frames[1].pixels, vec![0x02, 0x00]);
    assert_eq!(inner.inner().renders(), 2);

    let json = log.to_json().expect("json");
    assert!(json.starts_with(r#"[{"frame":1,"pixels":[1,0]}"#), "{json}");
}

#[test]
fn passthrough_recording_sink_has_no_log() {
    let mut sink = RecordingSink::passthrough(MemorySink::new(1));
    sink.render().expect("render");
    assert!(sink.log().is_none());
    let (inner, log) = sink.into_parts();
    assert!(log.is_none());
    assert_eq!(inner.renders(), 1);
}

#[test]
fn smart_leds_sink_maps_channel_order() {
    let mut sink = SmartLedsSink::new(MockStrip::default(), 2, ChannelOrder::Grb, 255);
    sink.set_pixel(0, Pixel::from_u32(0xFF0000));
    sink.set_pixel(1, Pixel::from_u32(0x00FF00));
    sink.render().expect("render");
    assert_eq!(
        sink.strip().writes,
        vec![vec![RGB8::new(0, 255, 0), RGB8::new(255, 0, 0)]]
    );

    let mut sink = SmartLedsSink::new(MockStrip::default(), 1, ChannelOrder::Rgb, 255);
    sink.set_pixel(0, Pixel::from_u32(0xFF0000));
    sink.render().expect("render");
    assert_eq!(sink.strip().writes, vec![vec![RGB8::new(255, 0, 0)]]);
}

#[test]
fn smart_leds_sink_dims_with_brightness() {
    let mut sink = SmartLedsSink::new(MockStrip::default(), 1, ChannelOrder::Rgb, 0);
    sink.set_pixel(0, Pixel::from_u32(0xFFFFFF));
    sink.render().expect("render");
    let written = sink.strip().writes[0][0];
    assert!(written.r < 255 && written.g < 255 && written.b < 255);
}

#[test]
fn smart_leds_write_error_becomes_hardware_error() {
    let strip = MockStrip {
        fail: true,
        ..MockStrip::default()
    };
    let mut sink = SmartLedsSink::new(strip, 1, ChannelOrder::Grb, 50);
    let err = sink.render().expect_err("write fails");
    assert!(err.message.contains("spi bus gone"), "{err}");
}

#[test]
fn terminal_sink_prints_one_line_per_frame() {
    let mut sink = TerminalSink::new(Vec::new(), 3, ChannelOrder::Rgb, 255);
    sink.set_pixel(1, Pixel::from_u32(0x00FF00));
    sink.render().expect("render");
    sink.set_pixel(1, Pixel::OFF);
    sink.render().expect("render");

    let out = String::from_utf8(sink.into_inner()).expect("utf8");
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], " \x1b[38;2;0;255;0m█ \x1b[0m");
    assert_eq!(lines[1], "   \x1b[0m");
}
