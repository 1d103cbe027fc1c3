//! Surface configuration and variant presets.
//!
//! Two surface generations share one foundation. Their behavioral deltas are
//! individual flags here, preset by [`SurfaceVariant`]:
//!
//! | Flag | `MenuSurface` | `TemporarySurface` |
//! |------|---------------|--------------------|
//! | `root_is_inside` | `true` | `false` |
//! | `focus_list` | `true` | `false` |
//! | `arrow_navigation` | `true` | `false` |
//! | `close_on_item_click` | `false` | `true` |
//! | `exclude_anchor_from_dismiss` | `false` | `false` |
//!
//! `root_is_inside` decides whether a click whose target is exactly the
//! surface root counts as inside (no dismissal) or outside (dismissal).

use core::fmt;
use core::time::Duration;

use msurf_layout::{AnchorMargin, Corner, MARGIN_TO_EDGE};

/// Default open animation duration.
pub const TRANSITION_OPEN_DURATION_MS: u64 = 120;
/// Default close animation duration.
pub const TRANSITION_CLOSE_DURATION_MS: u64 = 75;
/// Upper bound accepted by [`SurfaceConfig::validate`].
pub const MAX_TRANSITION_DURATION_MS: u64 = 10_000;

/// Surface generation whose behavior a config starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SurfaceVariant {
    #[default]
    MenuSurface,
    TemporarySurface,
}

/// Foundation configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurfaceConfig {
    pub variant: SurfaceVariant,
    pub anchor_corner: Corner,
    pub anchor_margin: AnchorMargin,
    /// Skip open/close animations.
    pub quick_open: bool,
    pub horizontal_auto_align: bool,
    /// Gap kept between a height-clamped surface and the viewport edge.
    pub margin_to_edge: f64,
    pub open_duration_ms: u64,
    pub close_duration_ms: u64,
    pub root_is_inside: bool,
    pub exclude_anchor_from_dismiss: bool,
    /// Whether the focusable-element snapshot is used at all.
    pub focus_list: bool,
    pub arrow_navigation: bool,
    pub close_on_item_click: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::menu_surface()
    }
}

impl SurfaceConfig {
    /// Preset for the current menu surface.
    #[must_use]
    pub fn menu_surface() -> Self {
        Self {
            variant: SurfaceVariant::MenuSurface,
            anchor_corner: Corner::TOP_START,
            anchor_margin: AnchorMargin::ZERO,
            quick_open: false,
            horizontal_auto_align: true,
            margin_to_edge: MARGIN_TO_EDGE,
            open_duration_ms: TRANSITION_OPEN_DURATION_MS,
            close_duration_ms: TRANSITION_CLOSE_DURATION_MS,
            root_is_inside: true,
            exclude_anchor_from_dismiss: false,
            focus_list: true,
            arrow_navigation: true,
            close_on_item_click: false,
        }
    }

    /// Preset for the deprecated temporary surface.
    #[must_use]
    pub fn temporary_surface() -> Self {
        Self {
            variant: SurfaceVariant::TemporarySurface,
            root_is_inside: false,
            focus_list: false,
            arrow_navigation: false,
            close_on_item_click: true,
            ..Self::menu_surface()
        }
    }

    /// Preset for `variant`.
    #[must_use]
    pub fn for_variant(variant: SurfaceVariant) -> Self {
        match variant {
            SurfaceVariant::MenuSurface => Self::menu_surface(),
            SurfaceVariant::TemporarySurface => Self::temporary_surface(),
        }
    }

    pub fn anchor_corner(mut self, corner: Corner) -> Self {
        self.anchor_corner = corner;
        self
    }

    pub fn anchor_margin(mut self, margin: AnchorMargin) -> Self {
        self.anchor_margin = margin;
        self
    }

    pub fn quick_open(mut self, quick: bool) -> Self {
        self.quick_open = quick;
        self
    }

    pub fn horizontal_auto_align(mut self, enabled: bool) -> Self {
        self.horizontal_auto_align = enabled;
        self
    }

    pub fn margin_to_edge(mut self, margin: f64) -> Self {
        self.margin_to_edge = margin;
        self
    }

    pub fn open_duration_ms(mut self, ms: u64) -> Self {
        self.open_duration_ms = ms;
        self
    }

    pub fn close_duration_ms(mut self, ms: u64) -> Self {
        self.close_duration_ms = ms;
        self
    }

    pub fn root_is_inside(mut self, inside: bool) -> Self {
        self.root_is_inside = inside;
        self
    }

    pub fn exclude_anchor_from_dismiss(mut self, exclude: bool) -> Self {
        self.exclude_anchor_from_dismiss = exclude;
        self
    }

    pub fn focus_list(mut self, enabled: bool) -> Self {
        self.focus_list = enabled;
        self
    }

    pub fn arrow_navigation(mut self, enabled: bool) -> Self {
        self.arrow_navigation = enabled;
        self
    }

    pub fn close_on_item_click(mut self, close: bool) -> Self {
        self.close_on_item_click = close;
        self
    }

    #[must_use]
    pub fn open_duration(&self) -> Duration {
        Duration::from_millis(self.open_duration_ms)
    }

    #[must_use]
    pub fn close_duration(&self) -> Duration {
        Duration::from_millis(self.close_duration_ms)
    }

    /// Check numeric fields.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NonFiniteMargin`] if any anchor margin side is NaN or infinite.
    /// - [`ConfigError::InvalidEdgeMargin`] if `margin_to_edge` is negative or not finite.
    /// - [`ConfigError::DurationTooLong`] if a transition exceeds
    ///   [`MAX_TRANSITION_DURATION_MS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.anchor_margin.is_finite() {
            return Err(ConfigError::NonFiniteMargin(self.anchor_margin));
        }
        if !self.margin_to_edge.is_finite() || self.margin_to_edge < 0.0 {
            return Err(ConfigError::InvalidEdgeMargin(self.margin_to_edge));
        }
        for (field, ms) in [
            ("open_duration_ms", self.open_duration_ms),
            ("close_duration_ms", self.close_duration_ms),
        ] {
            if ms > MAX_TRANSITION_DURATION_MS {
                return Err(ConfigError::DurationTooLong { field, ms });
            }
        }
        Ok(())
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFiniteMargin(AnchorMargin),
    InvalidEdgeMargin(f64),
    DurationTooLong { field: &'static str, ms: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteMargin(m) => write!(
                f,
                "anchor margin must be finite (top {}, right {}, bottom {}, left {})",
                m.top, m.right, m.bottom, m.left
            ),
            Self::InvalidEdgeMargin(v) => {
                write!(f, "margin to edge must be a finite, non-negative number, got {v}")
            }
            Self::DurationTooLong { field, ms } => write!(
                f,
                "{field} of {ms}ms exceeds the {MAX_TRANSITION_DURATION_MS}ms limit"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
