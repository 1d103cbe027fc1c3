//! Surface lifecycle states and the values flowing out of event handling.

use core::fmt;

/// Lifecycle state.
///
/// ```text
/// Closed ──open()──▶ Opening ──deadline──▶ Open
///   ▲                   │ close()            │ close()
///   │                   ▼                    ▼
///   └──────deadline── Closing ◀──────────────┘
/// ```
///
/// `close()` while `Opening` jumps straight to `Closed`; `open()` while
/// `Closing` jumps straight to `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl SurfaceState {
    /// Opening or open.
    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }

    /// A deferred transition is pending.
    #[inline]
    #[must_use]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

impl fmt::Display for SurfaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Closing => "closing",
        })
    }
}

/// Why the surface closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// `close()` called by the owner.
    Programmatic,
    /// Escape pressed inside the surface.
    Escape,
    /// Click outside the surface.
    OutsideClick,
    /// An enabled focusable item was clicked.
    ItemSelected(usize),
}

impl CloseReason {
    /// Whether the user dismissed the surface without choosing anything.
    #[must_use]
    pub const fn is_cancel(self) -> bool {
        matches!(self, Self::Escape | Self::OutsideClick)
    }
}

/// Outcome of an event handler. `Some` means the host should suppress the
/// event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceAction {
    /// The surface started closing.
    Dismissed(CloseReason),
    /// Focus moved to the item at this index.
    FocusMoved(usize),
    /// An item was selected and the surface started closing.
    Selected(usize),
}

/// Options for [`open`](super::MenuSurfaceFoundation::open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenOptions {
    /// Item to focus once open. `None` focuses the surface itself.
    pub focus_index: Option<usize>,
}

impl OpenOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self { focus_index: None }
    }

    #[must_use]
    pub const fn focus_index(mut self, index: usize) -> Self {
        self.focus_index = Some(index);
        self
    }
}
