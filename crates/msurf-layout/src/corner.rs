//! Anchor corners as independent flip bits.
//!
//! A [`Corner`] names both the surface corner that is pinned and the anchor
//! corner it is pinned to. The vertical and horizontal halves are separate
//! bits so the solver can flip one axis without touching the other:
//!
//! | Corner | `BOTTOM` | `RIGHT` | `FLIP_RTL` |
//! |--------|----------|---------|------------|
//! | `TOP_LEFT` | 0 | 0 | 0 |
//! | `TOP_RIGHT` | 0 | 1 | 0 |
//! | `BOTTOM_LEFT` | 1 | 0 | 0 |
//! | `BOTTOM_RIGHT` | 1 | 1 | 0 |
//! | `TOP_START` | 0 | 0 | 1 |
//! | `TOP_END` | 0 | 1 | 1 |
//! | `BOTTOM_START` | 1 | 0 | 1 |
//! | `BOTTOM_END` | 1 | 1 | 1 |
//!
//! Start/end corners are direction-relative: [`Corner::resolve`] mirrors
//! them horizontally for right-to-left content.

use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use msurf_core::TextDirection;

bitflags! {
    /// Raw flip bits backing a [`Corner`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CornerBits: u8 {
        const BOTTOM = 0b001;
        const RIGHT = 0b010;
        const FLIP_RTL = 0b100;
    }
}

/// Which corner of the surface is pinned to the same corner of the anchor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Corner(CornerBits);

impl Corner {
    pub const TOP_LEFT: Self = Self(CornerBits::empty());
    pub const TOP_RIGHT: Self = Self(CornerBits::RIGHT);
    pub const BOTTOM_LEFT: Self = Self(CornerBits::BOTTOM);
    pub const BOTTOM_RIGHT: Self = Self(CornerBits::BOTTOM.union(CornerBits::RIGHT));
    pub const TOP_START: Self = Self(CornerBits::FLIP_RTL);
    pub const TOP_END: Self = Self(CornerBits::FLIP_RTL.union(CornerBits::RIGHT));
    pub const BOTTOM_START: Self = Self(CornerBits::FLIP_RTL.union(CornerBits::BOTTOM));
    pub const BOTTOM_END: Self = Self(
        CornerBits::FLIP_RTL
            .union(CornerBits::BOTTOM)
            .union(CornerBits::RIGHT),
    );

    /// The four physical corners.
    pub const PHYSICAL: [Self; 4] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
    ];

    /// All eight corners, physical first.
    pub const ALL: [Self; 8] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
        Self::TOP_START,
        Self::TOP_END,
        Self::BOTTOM_START,
        Self::BOTTOM_END,
    ];

    #[inline]
    #[must_use]
    pub const fn from_bits(bits: CornerBits) -> Self {
        Self(bits)
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> CornerBits {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn has_bit(self, bit: CornerBits) -> bool {
        self.0.contains(bit)
    }

    #[inline]
    #[must_use]
    pub const fn is_bottom(self) -> bool {
        self.has_bit(CornerBits::BOTTOM)
    }

    #[inline]
    #[must_use]
    pub const fn is_right(self) -> bool {
        self.has_bit(CornerBits::RIGHT)
    }

    /// Whether this is a start/end (direction-relative) corner.
    #[inline]
    #[must_use]
    pub const fn is_direction_relative(self) -> bool {
        self.has_bit(CornerBits::FLIP_RTL)
    }

    #[inline]
    #[must_use]
    pub const fn with_bit(self, bit: CornerBits, on: bool) -> Self {
        if on {
            Self(self.0.union(bit))
        } else {
            Self(self.0.difference(bit))
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_bottom(self, bottom: bool) -> Self {
        self.with_bit(CornerBits::BOTTOM, bottom)
    }

    #[inline]
    #[must_use]
    pub const fn with_right(self, right: bool) -> Self {
        self.with_bit(CornerBits::RIGHT, right)
    }

    /// Toggle the BOTTOM bit.
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Self(self.0.symmetric_difference(CornerBits::BOTTOM))
    }

    /// Toggle the RIGHT bit.
    #[inline]
    #[must_use]
    pub const fn flip_horizontal(self) -> Self {
        Self(self.0.symmetric_difference(CornerBits::RIGHT))
    }

    /// Resolve a start/end corner into a physical one for `direction`.
    ///
    /// Physical corners are returned unchanged.
    #[must_use]
    pub const fn resolve(self, direction: TextDirection) -> Self {
        if !self.is_direction_relative() {
            return self;
        }
        let physical = Self(self.0.difference(CornerBits::FLIP_RTL));
        if direction.is_rtl() {
            physical.flip_horizontal()
        } else {
            physical
        }
    }

    /// Kebab-case name, e.g. `"bottom-end"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match (
            self.is_direction_relative(),
            self.is_bottom(),
            self.is_right(),
        ) {
            (false, false, false) => "top-left",
            (false, false, true) => "top-right",
            (false, true, false) => "bottom-left",
            (false, true, true) => "bottom-right",
            (true, false, false) => "top-start",
            (true, false, true) => "top-end",
            (true, true, false) => "bottom-start",
            (true, true, true) => "bottom-end",
        }
    }
}

impl fmt::Debug for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Corner({})", self.name())
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized corner name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCornerError {
    input: String,
}

impl ParseCornerError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseCornerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown corner '{}' (expected top|bottom-left|right|start|end)",
            self.input
        )
    }
}

impl std::error::Error for ParseCornerError {}

impl FromStr for Corner {
    type Err = ParseCornerError;

    /// Accepts `top-left`, `TOP_LEFT`, `top_left`, and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|corner| corner.name() == normalized)
            .ok_or_else(|| ParseCornerError {
                input: s.to_owned(),
            })
    }
}

impl TryFrom<String> for Corner {
    type Error = ParseCornerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Corner> for String {
    fn from(corner: Corner) -> Self {
        corner.name().to_owned()
    }
}
