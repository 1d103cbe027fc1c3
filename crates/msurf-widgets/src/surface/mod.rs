#![forbid(unsafe_code)]

//! Menu surface: an anchored, transient container for menus and popups.
//!
//! # Overview
//!
//! [`MenuSurfaceFoundation`] is the headless controller. It owns:
//! - the [`SurfaceState`] machine (`Closed → Opening → Open → Closing`)
//! - anchor-relative placement via `msurf_layout::PlacementOptions`
//! - focus save/restore and the focusable-item snapshot ([`FocusTracker`])
//! - Escape, Tab, arrow-key, and outside-click handling
//!
//! Everything host-specific goes through [`SurfaceAdapter`].
//!
//! # Example
//!
//! ```ignore
//! let mut surface = MenuSurfaceFoundation::with_config(adapter, SurfaceConfig::menu_surface());
//! surface.init();
//! surface.open(OpenOptions::new().focus_index(0));
//!
//! // host event loop
//! if let Some(action) = surface.handle_keydown(&key, Some(&target)) {
//!     prevent_default();
//! }
//! if let Some(deadline) = surface.next_deadline() {
//!     schedule_tick(deadline);
//! }
//! ```

mod adapter;
mod config;
mod focus;
mod foundation;
mod state;

pub use adapter::{
    ATTR_ARIA_DISABLED, CLASS_ANIMATING_CLOSED, CLASS_ANIMATING_OPEN, CLASS_OPEN, CLASS_ROOT,
    InteractionKind, SurfaceAdapter,
};
pub use config::{
    ConfigError, MAX_TRANSITION_DURATION_MS, SurfaceConfig, SurfaceVariant,
    TRANSITION_CLOSE_DURATION_MS, TRANSITION_OPEN_DURATION_MS,
};
pub use focus::FocusTracker;
pub use foundation::MenuSurfaceFoundation;
pub use state::{CloseReason, OpenOptions, SurfaceAction, SurfaceState};
