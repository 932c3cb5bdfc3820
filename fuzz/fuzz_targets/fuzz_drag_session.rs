#![no_main]

use libfuzzer_sys::fuzz_target;
use magsnap_snap::{CanvasBounds, DragSession, Element, ElementId, Point, Rect, SnapTuning};

fuzz_target!(|data: &[u8]| {
    // Pairs of bytes become pointer samples on a small integer lattice.
    if data.len() < 2 {
        return;
    }
    let canvas = CanvasBounds::new(1920.0, 1080.0);
    let tuning = SnapTuning::default();
    let siblings = [
        Element::new(ElementId::new(2), Rect::new(400.0, 300.0, 200.0, 120.0)),
        Element::new(ElementId::new(3), Rect::new(1100.0, 600.0, 300.0, 200.0)),
    ];
    let element = Element::new(ElementId::new(1), Rect::new(100.0, 100.0, 160.0, 90.0));

    let press = Point::new(f64::from(data[0]) + 100.0, f64::from(data[1]) + 100.0);
    let mut session = DragSession::begin(element, press);
    for pair in data[2..].chunks_exact(2) {
        let pointer = Point::new(f64::from(pair[0]) * 8.0, f64::from(pair[1]) * 5.0);
        if let Some(frame) = session.update(pointer, &siblings, &canvas, &tuning) {
            let rect = frame.applied;
            assert!(rect.x >= 0.0 && rect.right() <= canvas.width, "x out of canvas");
            assert!(rect.y >= 0.0 && rect.bottom() <= canvas.height, "y out of canvas");
            assert!((0.0..=1.0).contains(&frame.velocity_factor));
        }
    }
    let outcome = session.end();
    assert_eq!(outcome.element.rect.width, 160.0);
});
