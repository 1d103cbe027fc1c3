#![forbid(unsafe_code)]

//! Shared primitives for the msurf crates.
//!
//! - [`geometry`]: pixel-space [`Size`] and [`Rect`]
//! - [`direction`]: [`TextDirection`] (LTR / RTL)
//! - [`event`]: key input decoded from host keyboard events

pub mod direction;
pub mod event;
pub mod geometry;

pub use direction::TextDirection;
pub use event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use geometry::{Rect, Size};
