//! Anchor margins.

/// Offsets applied along the pinned edges of the surface.
///
/// Only the two sides matching the effective corner are used: `left`/`top`
/// move a left/top-pinned surface right/down, `right`/`bottom` move a
/// right/bottom-pinned surface left/up. Unset sides are `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnchorMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl AnchorMargin {
    /// All-zero margin.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Same margin on every side.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[must_use]
    pub const fn top(mut self, value: f64) -> Self {
        self.top = value;
        self
    }

    #[must_use]
    pub const fn right(mut self, value: f64) -> Self {
        self.right = value;
        self
    }

    #[must_use]
    pub const fn bottom(mut self, value: f64) -> Self {
        self.bottom = value;
        self
    }

    #[must_use]
    pub const fn left(mut self, value: f64) -> Self {
        self.left = value;
        self
    }

    /// Whether every side is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.left.is_finite()
    }
}
