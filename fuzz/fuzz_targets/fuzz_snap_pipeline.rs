#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use magsnap_snap::{
    CanvasBounds, Element, ElementId, Point, Rect, SnapTuning, generate_candidates,
    guide_overlay, resolve_position,
};

#[derive(Debug, Arbitrary)]
struct Input {
    canvas: (f64, f64),
    dragged: (f64, f64, f64, f64),
    raw: (f64, f64),
    siblings: Vec<(u8, f64, f64, f64, f64)>,
}

fuzz_target!(|input: Input| {
    let canvas = CanvasBounds::new(input.canvas.0, input.canvas.1);
    let (x, y, w, h) = input.dragged;
    let dragged = Element::new(ElementId::new(0), Rect::new(x, y, w, h));
    let siblings: Vec<Element> = input
        .siblings
        .iter()
        .take(32)
        .map(|&(id, x, y, w, h)| Element::new(ElementId::new(u64::from(id)), Rect::new(x, y, w, h)))
        .collect();
    let tuning = SnapTuning::default();

    let candidates = generate_candidates(&dragged, &siblings, &canvas, &tuning);
    let raw = Point::new(input.raw.0, input.raw.1);
    let resolved = resolve_position(raw, &candidates, &dragged, &canvas, &tuning);
    let _ = guide_overlay(resolved.point(), &dragged, &siblings, &candidates, &canvas, &tuning);

    if !dragged.rect.is_valid() || !canvas.is_valid() {
        assert!(candidates.is_empty(), "degenerate input produced candidates");
    }
    if !dragged.rect.is_valid() || !canvas.is_valid() || !raw.is_finite() {
        assert!(!resolved.in_snap_zone, "degenerate input reported a snap");
    } else if dragged.rect.width <= canvas.width && dragged.rect.height <= canvas.height {
        assert!(resolved.x >= 0.0 && resolved.x <= canvas.width - dragged.rect.width);
        assert!(resolved.y >= 0.0 && resolved.y <= canvas.height - dragged.rect.height);
    }
});
