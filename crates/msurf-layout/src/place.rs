//! Anchored placement solver.
//!
//! # Algorithm
//!
//! 1. Resolve start/end corners for the text direction.
//! 2. Per axis, compare the space available to the configured placement with
//!    the space available to the mirrored one. If the surface overflows the
//!    configured side and the mirrored side overflows less, flip that bit.
//!    Horizontal flipping can be switched off.
//! 3. The effective corner picks the anchor corner used as origin; margins on
//!    the pinned sides are applied (left/top added, right/bottom subtracted).
//! 4. The position is expressed as far-edge offsets for right/bottom pinned
//!    surfaces, so the surface stays put while the viewport resizes.
//! 5. If the surface is taller than the space left on its side (minus the
//!    edge margin) a max-height clamp is reported.
//! 6. The transform origin follows the effective corner, except that origin-x
//!    becomes `center` when the anchor is wider than
//!    [`ANCHOR_TO_SURFACE_WIDTH_RATIO`] of the surface width.
//!
//! Space available per pinned side:
//!
//! ```text
//! left pinned   : viewport.width  - (anchor.left + margin.left)
//! right pinned  : anchor.right  - margin.right
//! top pinned    : viewport.height - (anchor.top + margin.top)
//! bottom pinned : anchor.bottom - margin.bottom
//! ```
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | Zero-area anchor (not laid out) | No flipping; configured corner kept |
//! | Anchor outside the viewport | Offsets computed as usual, may be negative |
//! | Surface taller than any side | Max-height clamped to `>= 0` |
//! | Anchor/surface width ratio above 0.67 | Origin-x is `center` whatever the RIGHT bit |
//! | Zero-width surface | Transform origin never centers |

use msurf_core::{Rect, Size, TextDirection};

use crate::corner::Corner;
use crate::margin::AnchorMargin;
use crate::position::{
    HorizontalOffset, OriginX, OriginY, Position, TransformOrigin, VerticalOffset,
};

/// Gap kept between a height-clamped surface and the viewport edge.
pub const MARGIN_TO_EDGE: f64 = 32.0;

/// Above this anchor/surface width ratio the animation scales from the center.
pub const ANCHOR_TO_SURFACE_WIDTH_RATIO: f64 = 0.67;

/// Measured inputs for one placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceGeometry {
    /// Anchor rectangle in viewport coordinates.
    pub anchor: Rect,
    /// Surface size, measured while open.
    pub surface: Size,
    /// Viewport size.
    pub viewport: Size,
}

impl SurfaceGeometry {
    #[must_use]
    pub const fn new(anchor: Rect, surface: Size, viewport: Size) -> Self {
        Self {
            anchor,
            surface,
            viewport,
        }
    }
}

/// Result of [`PlacementOptions::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Effective physical corner after direction resolution and flipping.
    pub corner: Corner,
    pub position: Position,
    /// `Some` when the surface must scroll internally.
    pub max_height: Option<f64>,
    pub transform_origin: TransformOrigin,
}

/// Placement configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOptions {
    pub corner: Corner,
    pub margin: AnchorMargin,
    pub direction: TextDirection,
    pub horizontal_auto_align: bool,
    pub margin_to_edge: f64,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            corner: Corner::TOP_START,
            margin: AnchorMargin::ZERO,
            direction: TextDirection::Ltr,
            horizontal_auto_align: true,
            margin_to_edge: MARGIN_TO_EDGE,
        }
    }
}

impl PlacementOptions {
    #[must_use]
    pub fn new(corner: Corner) -> Self {
        Self {
            corner,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn margin(mut self, margin: AnchorMargin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn horizontal_auto_align(mut self, enabled: bool) -> Self {
        self.horizontal_auto_align = enabled;
        self
    }

    #[must_use]
    pub fn margin_to_edge(mut self, margin: f64) -> Self {
        self.margin_to_edge = margin;
        self
    }

    /// Compute the placement for `geometry`.
    #[must_use]
    pub fn resolve(&self, geometry: &SurfaceGeometry) -> Placement {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "surface_place",
            corner = %self.corner,
            ax = geometry.anchor.x,
            ay = geometry.anchor.y,
            aw = geometry.anchor.width,
            ah = geometry.anchor.height,
            sw = geometry.surface.width,
            sh = geometry.surface.height
        )
        .entered();

        let SurfaceGeometry {
            anchor,
            surface,
            viewport,
        } = *geometry;
        let laid_out = anchor.area() > 0.0;

        let mut corner = self.corner.resolve(self.direction);

        if laid_out && self.horizontal_auto_align {
            let current = self.available_width(geometry, corner.is_right());
            let mirrored = self.available_width(geometry, !corner.is_right());
            if should_flip(surface.width, current, mirrored) {
                corner = corner.flip_horizontal();
            }
        }

        if laid_out {
            let current = self.available_height(geometry, corner.is_bottom());
            let mirrored = self.available_height(geometry, !corner.is_bottom());
            if should_flip(surface.height, current, mirrored) {
                corner = corner.flip_vertical();
            }
        }

        let x = if corner.is_right() {
            anchor.right() - self.margin.right
        } else {
            anchor.left() + self.margin.left
        };
        let y = if corner.is_bottom() {
            anchor.bottom() - self.margin.bottom
        } else {
            anchor.top() + self.margin.top
        };

        let horizontal = if corner.is_right() {
            HorizontalOffset::Right(viewport.width - x)
        } else {
            HorizontalOffset::Left(x)
        };
        let vertical = if corner.is_bottom() {
            VerticalOffset::Bottom(viewport.height - y)
        } else {
            VerticalOffset::Top(y)
        };

        let available_height = if laid_out {
            self.available_height(geometry, corner.is_bottom())
        } else {
            viewport.height
        };
        let limit = (available_height - self.margin_to_edge).max(0.0);
        let max_height = (surface.height > limit).then_some(limit);

        let placement = Placement {
            corner,
            position: Position::new(horizontal, vertical),
            max_height,
            transform_origin: transform_origin(corner, anchor.size(), surface),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            effective = %placement.corner,
            max_height = ?placement.max_height,
            "placement resolved"
        );

        placement
    }

    fn available_width(&self, geometry: &SurfaceGeometry, right: bool) -> f64 {
        if right {
            geometry.anchor.right() - self.margin.right
        } else {
            geometry.viewport.width - (geometry.anchor.left() + self.margin.left)
        }
    }

    fn available_height(&self, geometry: &SurfaceGeometry, bottom: bool) -> f64 {
        if bottom {
            geometry.anchor.bottom() - self.margin.bottom
        } else {
            geometry.viewport.height - (geometry.anchor.top() + self.margin.top)
        }
    }
}

/// Flip when the current side overflows and the mirrored side overflows less.
fn should_flip(required: f64, current: f64, mirrored: f64) -> bool {
    let overflow = required - current;
    let mirrored_overflow = required - mirrored;
    overflow > 0.0 && mirrored_overflow < overflow
}

fn transform_origin(corner: Corner, anchor: Size, surface: Size) -> TransformOrigin {
    let x = if surface.width > 0.0 && anchor.width / surface.width > ANCHOR_TO_SURFACE_WIDTH_RATIO
    {
        OriginX::Center
    } else if corner.is_right() {
        OriginX::Right
    } else {
        OriginX::Left
    };
    let y = if corner.is_bottom() {
        OriginY::Bottom
    } else {
        OriginY::Top
    };
    TransformOrigin::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry(anchor: Rect, surface: (f64, f64), viewport: (f64, f64)) -> SurfaceGeometry {
        SurfaceGeometry::new(
            anchor,
            Size::new(surface.0, surface.1),
            Size::new(viewport.0, viewport.1),
        )
    }

    #[test]
    fn narrow_right_edge_flips_horizontally() {
        let g = geometry(
            Rect::new(300.0, 10.0, 100.0, 20.0),
            (150.0, 100.0),
            (320.0, 480.0),
        );
        let placement = PlacementOptions::new(Corner::TOP_LEFT).resolve(&g);
        assert!(placement.corner.is_right());
        assert_eq!(placement.position.left(), None);
        assert_eq!(placement.position.right(), Some(320.0 - 400.0));
        assert_eq!(placement.position.top(), Some(10.0));
    }

    #[test]
    fn disabled_horizontal_auto_align_keeps_configured_corner() {
        let g = geometry(
            Rect::new(300.0, 10.0, 100.0, 20.0),
            (150.0, 100.0),
            (320.0, 480.0),
        );
        let placement = PlacementOptions::new(Corner::TOP_LEFT)
            .horizontal_auto_align(false)
            .resolve(&g);
        assert_eq!(placement.corner, Corner::TOP_LEFT);
        assert_eq!(placement.position.left(), Some(300.0));
    }

    #[test]
    fn fits_without_flipping() {
        let g = geometry(
            Rect::new(20.0, 20.0, 80.0, 30.0),
            (120.0, 90.0),
            (800.0, 600.0),
        );
        for corner in Corner::PHYSICAL {
            // Every corner fits on a big viewport with the anchor far from
            // the right/bottom edges, except bottom/right pinned ones whose
            // space ends at the anchor.
            let placement = PlacementOptions::new(corner).resolve(&g);
            if !corner.is_right() {
                assert!(!placement.corner.is_right(), "{corner}");
            }
            if !corner.is_bottom() {
                assert!(!placement.corner.is_bottom(), "{corner}");
            }
        }
    }

    #[test]
    fn bottom_right_uses_far_edges() {
        let g = geometry(
            Rect::new(400.0, 400.0, 100.0, 40.0),
            (200.0, 90.0),
            (800.0, 600.0),
        );
        let placement = PlacementOptions::new(Corner::BOTTOM_RIGHT).resolve(&g);
        assert_eq!(placement.corner, Corner::BOTTOM_RIGHT);
        assert_eq!(placement.position.right(), Some(800.0 - 500.0));
        assert_eq!(placement.position.bottom(), Some(600.0 - 440.0));
        assert_eq!(
            placement.transform_origin,
            TransformOrigin::new(OriginX::Right, OriginY::Bottom)
        );
    }

    #[test]
    fn low_anchor_flips_vertically() {
        let g = geometry(
            Rect::new(10.0, 550.0, 60.0, 30.0),
            (120.0, 200.0),
            (800.0, 600.0),
        );
        let placement = PlacementOptions::new(Corner::TOP_LEFT).resolve(&g);
        assert_eq!(placement.corner, Corner::BOTTOM_LEFT);
        assert_eq!(placement.position.bottom(), Some(600.0 - 580.0));
        assert_eq!(placement.position.left(), Some(10.0));
    }

    #[test]
    fn margins_apply_to_pinned_sides() {
        let g = geometry(
            Rect::new(100.0, 100.0, 50.0, 20.0),
            (80.0, 60.0),
            (800.0, 600.0),
        );
        let margin = AnchorMargin::new().top(20.0).left(5.0).right(7.0).bottom(3.0);

        let top_left = PlacementOptions::new(Corner::TOP_LEFT)
            .margin(margin)
            .resolve(&g);
        assert_eq!(top_left.position.left(), Some(105.0));
        assert_eq!(top_left.position.top(), Some(120.0));

        let bottom_right = PlacementOptions::new(Corner::BOTTOM_RIGHT)
            .margin(margin)
            .resolve(&g);
        assert_eq!(bottom_right.position.right(), Some(800.0 - (150.0 - 7.0)));
        assert_eq!(bottom_right.position.bottom(), Some(600.0 - (120.0 - 3.0)));
    }

    #[test]
    fn zero_area_anchor_never_flips() {
        let g = geometry(Rect::new(790.0, 590.0, 0.0, 0.0), (200.0, 200.0), (800.0, 600.0));
        let placement = PlacementOptions::new(Corner::TOP_LEFT).resolve(&g);
        assert_eq!(placement.corner, Corner::TOP_LEFT);
        assert_eq!(placement.position.left(), Some(790.0));
        assert_eq!(placement.position.top(), Some(590.0));
    }

    #[test]
    fn anchor_outside_viewport_still_computes_offsets() {
        let g = geometry(
            Rect::new(-300.0, -200.0, 100.0, 20.0),
            (100.0, 100.0),
            (800.0, 600.0),
        );
        let placement = PlacementOptions::new(Corner::TOP_LEFT).resolve(&g);
        assert_eq!(placement.position.left(), Some(-300.0));
        assert_eq!(placement.position.top(), Some(-200.0));
    }

    #[test]
    fn tall_surface_gets_max_height() {
        let g = geometry(
            Rect::new(10.0, 100.0, 60.0, 30.0),
            (120.0, 900.0),
            (800.0, 600.0),
        );
        let placement = PlacementOptions::new(Corner::TOP_LEFT).resolve(&g);
        // Below: 500px, above: 130px. Stays top-pinned.
        assert_eq!(placement.corner, Corner::TOP_LEFT);
        assert_eq!(placement.max_height, Some(500.0 - MARGIN_TO_EDGE));
    }

    #[test]
    fn short_surface_clears_max_height() {
        let g = geometry(
            Rect::new(10.0, 100.0, 60.0, 30.0),
            (120.0, 100.0),
            (800.0, 600.0),
        );
        let placement = PlacementOptions::new(Corner::TOP_LEFT).resolve(&g);
        assert_eq!(placement.max_height, None);
    }

    #[test]
    fn max_height_never_negative() {
        let g = geometry(
            Rect::new(10.0, 590.0, 60.0, 5.0),
            (120.0, 900.0),
            (800.0, 600.0),
        );
        let placement = PlacementOptions::new(Corner::TOP_LEFT)
            .margin_to_edge(1000.0)
            .resolve(&g);
        assert_eq!(placement.max_height, Some(0.0));
    }

    #[test]
    fn start_corner_mirrors_in_rtl() {
        let g = geometry(
            Rect::new(300.0, 10.0, 100.0, 20.0),
            (150.0, 100.0),
            (800.0, 600.0),
        );
        let ltr = PlacementOptions::new(Corner::TOP_START).resolve(&g);
        assert_eq!(ltr.corner, Corner::TOP_LEFT);

        let rtl = PlacementOptions::new(Corner::TOP_START)
            .direction(TextDirection::Rtl)
            .resolve(&g);
        assert_eq!(rtl.corner, Corner::TOP_RIGHT);
        assert_eq!(rtl.position.right(), Some(400.0));
    }

    #[test]
    fn wide_anchor_centers_transform_origin() {
        let g = geometry(
            Rect::new(10.0, 10.0, 200.0, 20.0),
            (220.0, 100.0),
            (800.0, 600.0),
        );
        let placement = PlacementOptions::new(Corner::TOP_LEFT).resolve(&g);
        assert_eq!(placement.transform_origin.to_string(), "center top");
    }

    fn arb_corner() -> impl Strategy<Value = Corner> {
        proptest::sample::select(Corner::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn sides_are_mutually_exclusive(
            corner in arb_corner(),
            ax in -500.0f64..1500.0,
            ay in -500.0f64..1500.0,
            aw in 0.0f64..400.0,
            ah in 0.0f64..400.0,
            sw in 0.0f64..800.0,
            sh in 0.0f64..800.0,
            margin in 0.0f64..50.0,
            rtl in any::<bool>(),
            auto in any::<bool>(),
        ) {
            let g = geometry(Rect::new(ax, ay, aw, ah), (sw, sh), (1024.0, 768.0));
            let placement = PlacementOptions::new(corner)
                .margin(AnchorMargin::uniform(margin))
                .direction(TextDirection::from_rtl(rtl))
                .horizontal_auto_align(auto)
                .resolve(&g);
            let p = placement.position;
            prop_assert!(p.left().is_some() != p.right().is_some());
            prop_assert!(p.top().is_some() != p.bottom().is_some());
            prop_assert_eq!(p.right().is_some(), placement.corner.is_right());
            prop_assert_eq!(p.bottom().is_some(), placement.corner.is_bottom());
            prop_assert!(!placement.corner.is_direction_relative());
            if let Some(h) = placement.max_height {
                prop_assert!(h >= 0.0);
            }
        }

        #[test]
        fn disabled_auto_align_never_flips_horizontally(
            corner in arb_corner(),
            ax in -500.0f64..1500.0,
            aw in 1.0f64..400.0,
            sw in 0.0f64..2000.0,
            rtl in any::<bool>(),
        ) {
            let direction = TextDirection::from_rtl(rtl);
            let g = geometry(Rect::new(ax, 100.0, aw, 20.0), (sw, 50.0), (1024.0, 768.0));
            let placement = PlacementOptions::new(corner)
                .direction(direction)
                .horizontal_auto_align(false)
                .resolve(&g);
            prop_assert_eq!(placement.corner.is_right(), corner.resolve(direction).is_right());
        }
    }
}
