#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use msurf_core::{Rect, Size, TextDirection};
use msurf_layout::{AnchorMargin, Corner, HorizontalOffset, PlacementOptions, SurfaceGeometry};

#[derive(Debug, Arbitrary)]
struct Input {
    anchor: [f32; 4],
    surface: [f32; 2],
    viewport: [f32; 2],
    margin: [f32; 4],
    corner: u8,
    rtl: bool,
    auto_align: bool,
}

fuzz_target!(|input: Input| {
    let [ax, ay, aw, ah] = input.anchor.map(f64::from);
    let [sw, sh] = input.surface.map(f64::from);
    let [vw, vh] = input.viewport.map(f64::from);
    let [mt, mr, mb, ml] = input.margin.map(f64::from);

    let corner = Corner::ALL[usize::from(input.corner) % Corner::ALL.len()];
    let geometry = SurfaceGeometry::new(
        Rect::new(ax, ay, aw, ah),
        Size::new(sw, sh),
        Size::new(vw, vh),
    );
    let placement = PlacementOptions::new(corner)
        .margin(AnchorMargin::new().top(mt).right(mr).bottom(mb).left(ml))
        .direction(TextDirection::from_rtl(input.rtl))
        .horizontal_auto_align(input.auto_align)
        .resolve(&geometry);

    // Effective corner is always physical.
    assert!(!placement.corner.is_direction_relative());

    // The position pins exactly the sides the effective corner names.
    assert_eq!(
        matches!(placement.position.horizontal, HorizontalOffset::Right(_)),
        placement.corner.is_right()
    );
    assert_eq!(placement.position.bottom().is_some(), placement.corner.is_bottom());

    if let Some(max_height) = placement.max_height {
        assert!(max_height >= 0.0 || max_height.is_nan());
    }

    let _ = placement.transform_origin.to_string();
});
