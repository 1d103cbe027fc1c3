#![forbid(unsafe_code)]

//! Anchor-relative placement for menu surfaces.
//!
//! Given an anchor rectangle, the measured surface size, and the viewport,
//! [`PlacementOptions::resolve`] picks the effective [`Corner`] (flipping
//! per axis when the configured one would overflow), the far-edge
//! [`Position`] offsets, an optional max-height clamp, and the
//! [`TransformOrigin`] for open/close animations.
//!
//! This is not a layout engine: exactly one rectangle is placed relative to
//! exactly one anchor.

pub mod corner;
pub mod margin;
pub mod place;
pub mod position;

pub use corner::{Corner, CornerBits, ParseCornerError};
pub use margin::AnchorMargin;
pub use place::{
    ANCHOR_TO_SURFACE_WIDTH_RATIO, MARGIN_TO_EDGE, Placement, PlacementOptions, SurfaceGeometry,
};
pub use position::{HorizontalOffset, OriginX, OriginY, Position, TransformOrigin, VerticalOffset};
