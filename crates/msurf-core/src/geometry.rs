//! Pixel-space geometry in viewport coordinates.
//!
//! Coordinates are CSS pixels with the origin at the top-left of the
//! viewport; `x` grows rightwards and `y` grows downwards.
//!
//! # Invariants
//!
//! - [`Size`] components are never negative and never NaN. Constructors
//!   clamp such inputs to `0.0`.
//! - [`Rect`] may sit partially or entirely outside the viewport; only its
//!   size is sanitized.

/// Width and height of a box (anchor, surface, or viewport).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a size, clamping negative or NaN components to zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    /// Area in square pixels.
    #[inline]
    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// Whether either dimension is zero.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle (e.g. a `getBoundingClientRect()` result).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle. Negative or NaN sizes are clamped to zero.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    #[inline]
    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether the rectangle has zero area (e.g. an element not yet laid out).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[inline]
fn non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
