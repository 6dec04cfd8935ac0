use crate::display::{FailAfter, MemorySink};
use crate::engine::{Outcome, Stats, Visualizer};
use crate::error::{AppError, EventError};
use crate::event::PacketEvent;
use crate::led::Pixel;
use crate::router::{ARP, CategoryRouter, ColorCycle, TCP, UDP};
use crate::trail::{Direction, TrailSweeper};

fn sweeper() -> TrailSweeper {
    TrailSweeper::new(3, 1).expect("sweeper")
}

fn suppressing_arp() -> CategoryRouter {
    let mut router = CategoryRouter::default();
    router.apply_override(ARP, false).expect("arp");
    router
}

#[test]
fn visible_event_runs_one_full_pass() {
    let mut viz = Visualizer::new(CategoryRouter::default(), sweeper(), MemorySink::new(10));
    let outcome = viz
        .handle(&PacketEvent::new(TCP, Direction::Forward))
        .expect("render");
    assert_eq!(outcome, Outcome::Rendered { frames: 16 });
    assert_eq!(viz.sink().renders(), 16);
    assert_eq!(viz.sink().frames()[2][2], Pixel::new(0, 0, 255));
}

#[test]
fn suppressed_event_renders_nothing() {
    let mut viz = Visualizer::new(suppressing_arp(), sweeper(), MemorySink::new(10));
    let outcome = viz
        .handle(&PacketEvent::new(ARP, Direction::Reverse))
        .expect("no render");
    assert_eq!(outcome, Outcome::Suppressed);
    assert_eq!(viz.sink().renders(), 0);
    assert_eq!(viz.stats().suppressed, 1);
}

#[test]
fn run_processes_events_in_order_and_skips_bad_lines() {
    let bad = serde_json::from_str::<u8>("x").expect_err("not a number");
    let events = vec![
        Ok(PacketEvent::new(TCP, Direction::Forward)),
        Err(EventError::Malformed {
            line: 2,
            source: bad,
        }),
        Ok(PacketEvent::new(ARP, Direction::Forward)),
        Ok(PacketEvent::new("Mystery", Direction::Reverse)),
    ];
    let mut viz = Visualizer::new(suppressing_arp(), sweeper(), MemorySink::new(10));
    let stats = viz.run(events).expect("run");
    assert_eq!(
        stats,
        Stats {
            events: 3,
            rendered: 2,
            suppressed: 1,
            frames: 32,
            skipped: 1,
        }
    );

    // 第二次扫描使用 Others 的白色，方向翻转
    let frame = &viz.sink().frames()[16 + 2];
    assert_eq!(frame[7], Pixel::from_u32(0xFFFFFF));
    assert_eq!(frame[9], Pixel::new(85, 85, 85));
}

#[test]
fn read_error_stops_the_loop() {
    let events = vec![
        Err(EventError::Io(std::io::Error::other("pipe closed"))),
        Ok(PacketEvent::new(TCP, Direction::Forward)),
    ];
    let mut viz = Visualizer::new(CategoryRouter::default(), sweeper(), MemorySink::new(10));
    let err = viz.run(events).expect_err("io error");
    assert!(matches!(err, AppError::Event(EventError::Io(_))));
    assert_eq!(viz.sink().renders(), 0);
}

#[test]
fn hardware_failure_is_fatal_to_the_loop() {
    let events = vec![
        Ok(PacketEvent::new(TCP, Direction::Forward)),
        Ok(PacketEvent::new(UDP, Direction::Forward)),
    ];
    let sink = FailAfter::new(MemorySink::new(14), 5);
    let mut viz = Visualizer::new(CategoryRouter::default(), sweeper(), sink);
    let err = viz.run(events).expect_err("render fails");
    assert!(matches!(err, AppError::Hardware(_)));

    assert_eq!(viz.stats().events, 1);
    assert_eq!(viz.stats().rendered, 0);
    let inner = viz.into_sink().into_inner();
    assert_eq!(inner.renders(), 4);
    assert_eq!(inner.clears(), 1);
}

#[test]
fn palette_overrides_category_color_per_pass() {
    let red = Pixel::from_u32(0x00FF00);
    let green = Pixel::from_u32(0xFF0000);
    let palette = ColorCycle::new(vec![red, green]).expect("palette");
    let mut viz = Visualizer::new(CategoryRouter::default(), sweeper(), MemorySink::new(10))
        .with_palette(Some(palette));

    for _ in 0..3 {
        viz.handle(&PacketEvent::new(TCP, Direction::Forward))
            .expect("render");
    }
    let heads = (0..3)
        .map(|pass| viz.sink().frames()[pass * 16 + 2][2])
        .collect::<Vec<_>>();
    assert_eq!(heads, vec![red, green, red]);
}
