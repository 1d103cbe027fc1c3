#![forbid(unsafe_code)]

//! Transient surfaces for msurf.
//!
//! The [`surface`] module holds the menu-surface foundation: a headless
//! state machine and placement driver that talks to its host through the
//! [`SurfaceAdapter`](surface::SurfaceAdapter) trait.

pub mod surface;

pub use surface::{
    CloseReason, MenuSurfaceFoundation, OpenOptions, SurfaceAction, SurfaceAdapter, SurfaceConfig,
    SurfaceState, SurfaceVariant,
};
