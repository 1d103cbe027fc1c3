#![forbid(unsafe_code)]

//! msurf: anchored, transient menu surfaces.
//!
//! This crate re-exports:
//! - [`msurf_core`]: geometry, text direction, and key events
//! - [`msurf_layout`]: the anchor-relative placement solver
//! - [`msurf_widgets`]: the menu-surface foundation and its adapter trait
//!
//! Most hosts only need the [`prelude`].

pub use msurf_core;
pub use msurf_layout;
pub use msurf_widgets;

pub mod prelude {
    //! Everything needed to implement an adapter and drive a surface.

    pub use msurf_core::{KeyCode, KeyEvent, KeyEventKind, Modifiers, Rect, Size, TextDirection};
    pub use msurf_layout::{AnchorMargin, Corner, Placement, PlacementOptions, Position};
    pub use msurf_widgets::surface::{
        CloseReason, InteractionKind, MenuSurfaceFoundation, OpenOptions, SurfaceAction,
        SurfaceAdapter, SurfaceConfig, SurfaceState, SurfaceVariant,
    };
}
