//! Host capabilities required by the surface foundation.
//!
//! The foundation never touches a DOM (or any other UI tree) directly. A host
//! implements [`SurfaceAdapter`] over its concrete surface element and passes
//! it to [`MenuSurfaceFoundation`](super::MenuSurfaceFoundation), which keeps
//! the core headless and unit-testable.
//!
//! # Handler registration
//!
//! `register_*` / `deregister_*` calls are always balanced by the
//! foundation: handlers are registered when opening starts and released when
//! closing starts, on `destroy()`, and when the foundation is dropped. A host
//! routes the corresponding events back into
//! [`handle_keydown`](super::MenuSurfaceFoundation::handle_keydown),
//! [`handle_click`](super::MenuSurfaceFoundation::handle_click), and
//! [`handle_body_click`](super::MenuSurfaceFoundation::handle_body_click).

use msurf_core::{Rect, Size};
use msurf_layout::Position;

use super::state::CloseReason;

/// Root class every surface element carries.
pub const CLASS_ROOT: &str = "mdc-menu-surface";
/// Present from open-start until close completes.
pub const CLASS_OPEN: &str = "mdc-menu-surface--open";
/// Present while the open animation runs.
pub const CLASS_ANIMATING_OPEN: &str = "mdc-menu-surface--animating-open";
/// Present while the close animation runs.
pub const CLASS_ANIMATING_CLOSED: &str = "mdc-menu-surface--animating-closed";

/// Attribute marking a focusable item as disabled.
pub const ATTR_ARIA_DISABLED: &str = "aria-disabled";

/// Element-scoped events the foundation listens to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InteractionKind {
    KeyDown,
    Click,
}

impl InteractionKind {
    /// Every kind, in registration order.
    pub const ALL: [Self; 2] = [Self::KeyDown, Self::Click];

    /// DOM event type name.
    #[must_use]
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::Click => "click",
        }
    }
}

/// Capabilities the foundation needs from its host.
pub trait SurfaceAdapter {
    /// Event target handle (a DOM node reference in web hosts).
    type Target;

    // --- Classes and attributes ---

    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn get_attribute_for_event_target(&self, target: &Self::Target, name: &str)
    -> Option<String>;

    // --- Geometry ---

    /// Measured size of the surface element.
    fn get_inner_dimensions(&self) -> Size;
    /// Whether an anchor element has been configured.
    fn has_anchor(&self) -> bool;
    /// Anchor bounding rect in viewport coordinates. Only called when
    /// [`has_anchor`](Self::has_anchor) is true.
    fn get_anchor_dimensions(&self) -> Rect;
    /// Bounding rect of the surface's parent element, used when no anchor is
    /// configured.
    fn get_parent_dimensions(&self) -> Rect;
    fn get_window_dimensions(&self) -> Size;

    // --- Focusable-element snapshot ---

    /// Capture the ordered focusable descendants. Called once per open; the
    /// remaining focus-list methods index into this snapshot until close.
    fn capture_focusable_elements(&mut self) {}
    fn get_number_focusable_elements(&self) -> usize;
    fn get_focused_item_index(&self) -> Option<usize>;
    fn focus_item_at_index(&mut self, index: usize);
    fn get_index_for_event_target(&self, target: &Self::Target) -> Option<usize>;

    // --- Event plumbing ---

    fn register_interaction_handler(&mut self, kind: InteractionKind);
    fn deregister_interaction_handler(&mut self, kind: InteractionKind);
    fn register_body_click_handler(&mut self);
    fn deregister_body_click_handler(&mut self);

    // --- Notifications ---

    /// The surface finished closing.
    fn notify_close(&mut self, reason: CloseReason);
    /// The surface finished opening.
    fn notify_open(&mut self) {}

    // --- Focus ---

    /// Remember the currently focused element (weakly).
    fn save_focus(&mut self);
    /// Refocus the saved element. Must do nothing if it has been detached.
    fn restore_focus(&mut self);
    /// Whether the surface element itself has focus.
    fn is_focused(&self) -> bool;
    /// Whether `target` is a descendant of the surface element.
    fn is_element_in_container(&self, target: &Self::Target) -> bool;
    /// Whether `target` is the surface element itself.
    fn is_surface_root(&self, target: &Self::Target) -> bool;
    /// Whether `target` is the anchor or one of its descendants.
    fn is_element_in_anchor(&self, _target: &Self::Target) -> bool {
        false
    }
    /// Focus the surface element.
    fn focus(&mut self);

    // --- Style ---

    fn is_rtl(&self) -> bool;
    fn set_transform_origin(&mut self, origin: &str);
    /// Apply `position`; sides not present in it must be cleared.
    fn set_position(&mut self, position: &Position);
    /// Set the max-height in pixels, or clear it with `None`.
    fn set_max_height(&mut self, height: Option<f64>);
}
