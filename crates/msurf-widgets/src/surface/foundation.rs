#![forbid(unsafe_code)]

//! Menu surface foundation.
//!
//! Owns the open/close state machine, drives placement through the adapter,
//! captures and restores focus, and dismisses the surface on outside clicks
//! and Escape.
//!
//! # Invariants
//!
//! - Handlers are registered exactly while the state is `Opening` or `Open`.
//! - At most one deferred transition is pending, and only in `Opening` or
//!   `Closing`.
//! - An animating class is only ever added when quick-open is off.
//! - Every completed close calls `notify_close` exactly once.
//!
//! # Failure Modes
//!
//! | Situation | Behavior |
//! |-----------|----------|
//! | `open()` while opening/open | No-op |
//! | `close()` while closing/closed | No-op |
//! | `close()` while opening | Jumps to `Closed` |
//! | `open()` while closing | Jumps to `Open` |
//! | Out-of-range `focus_index` | Focus left unchanged |
//! | No anchor configured | Parent rect used as anchor |
//! | Invalid config / margin | Logged, previous value kept |
//! | Root class missing at `init()` | Logged, class added |

use core::fmt;

use msurf_core::{KeyCode, KeyEvent, TextDirection};
use msurf_layout::{AnchorMargin, Corner, Placement, PlacementOptions, SurfaceGeometry};
use tracing::{debug, trace, warn};
use web_time::Instant;

use super::adapter::{
    ATTR_ARIA_DISABLED, CLASS_ANIMATING_CLOSED, CLASS_ANIMATING_OPEN, CLASS_OPEN, CLASS_ROOT,
    InteractionKind, SurfaceAdapter,
};
use super::config::SurfaceConfig;
use super::focus::FocusTracker;
use super::state::{CloseReason, OpenOptions, SurfaceAction, SurfaceState};

/// A deferred transition waiting for its animation to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Open {
        deadline: Instant,
        focus_index: Option<usize>,
    },
    Close {
        deadline: Instant,
        reason: CloseReason,
    },
}

impl Pending {
    fn deadline(self) -> Instant {
        match self {
            Self::Open { deadline, .. } | Self::Close { deadline, .. } => deadline,
        }
    }

    fn animating_class(self) -> &'static str {
        match self {
            Self::Open { .. } => CLASS_ANIMATING_OPEN,
            Self::Close { .. } => CLASS_ANIMATING_CLOSED,
        }
    }
}

/// Registration state of the interaction and body-click handlers.
#[derive(Debug, Default)]
struct Handlers {
    registered: bool,
}

impl Handlers {
    fn acquire<A: SurfaceAdapter>(&mut self, adapter: &mut A) {
        if self.registered {
            return;
        }
        for kind in InteractionKind::ALL {
            adapter.register_interaction_handler(kind);
        }
        adapter.register_body_click_handler();
        self.registered = true;
    }

    fn release<A: SurfaceAdapter>(&mut self, adapter: &mut A) {
        if !self.registered {
            return;
        }
        for kind in InteractionKind::ALL {
            adapter.deregister_interaction_handler(kind);
        }
        adapter.deregister_body_click_handler();
        self.registered = false;
    }
}

/// Headless menu-surface controller.
///
/// The owner calls [`open`](Self::open) / [`close`](Self::close), forwards
/// host events to the `handle_*` methods, and drives deferred transitions
/// with [`tick`](Self::tick) (or [`finish_animation`](Self::finish_animation)
/// on an animation-end event).
pub struct MenuSurfaceFoundation<A: SurfaceAdapter> {
    adapter: A,
    config: SurfaceConfig,
    state: SurfaceState,
    pending: Option<Pending>,
    handlers: Handlers,
    focus: FocusTracker,
    placement: Option<Placement>,
}

impl<A: SurfaceAdapter> MenuSurfaceFoundation<A> {
    /// Create a foundation with the menu-surface preset.
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, SurfaceConfig::default())
    }

    /// Create a foundation with `config`.
    ///
    /// An invalid config is logged and replaced by its variant's preset.
    pub fn with_config(adapter: A, config: SurfaceConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!(%err, "invalid surface config; falling back to variant preset");
                SurfaceConfig::for_variant(config.variant)
            }
        };
        Self {
            adapter,
            config,
            state: SurfaceState::Closed,
            pending: None,
            handlers: Handlers::default(),
            focus: FocusTracker::new(),
            placement: None,
        }
    }

    /// Sync with the element and reset to `Closed`.
    pub fn init(&mut self) {
        if !self.adapter.has_class(CLASS_ROOT) {
            warn!(class = CLASS_ROOT, "surface element lacks root class; adding it");
            self.adapter.add_class(CLASS_ROOT);
        }
        for class in [CLASS_OPEN, CLASS_ANIMATING_OPEN, CLASS_ANIMATING_CLOSED] {
            if self.adapter.has_class(class) {
                debug!(class, "clearing stale surface class");
                self.adapter.remove_class(class);
            }
        }
        self.pending = None;
        self.handlers.release(&mut self.adapter);
        self.focus = FocusTracker::new();
        self.placement = None;
        self.state = SurfaceState::Closed;
    }

    /// Tear down: cancel pending transitions and release handlers.
    ///
    /// Does not notify the owner.
    pub fn destroy(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.adapter.remove_class(pending.animating_class());
        }
        self.handlers.release(&mut self.adapter);
        if self.state != SurfaceState::Closed {
            self.adapter.remove_class(CLASS_OPEN);
        }
        self.focus = FocusTracker::new();
        self.state = SurfaceState::Closed;
        debug!("surface destroyed");
    }

    // --- Accessors ---

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// `true` from `open()` until `close()` starts.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The last placement applied, if any.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Size of the focusable snapshot taken at open.
    pub fn focusable_count(&self) -> usize {
        self.focus.len()
    }

    /// Whether the handlers are currently registered.
    pub fn handlers_registered(&self) -> bool {
        self.handlers.registered
    }

    // --- Configuration ---

    pub fn set_quick_open(&mut self, quick_open: bool) {
        self.config.quick_open = quick_open;
    }

    pub fn set_anchor_corner(&mut self, corner: Corner) {
        self.config.anchor_corner = corner;
    }

    /// Replace the anchor margin. Non-finite margins are rejected.
    pub fn set_anchor_margin(&mut self, margin: AnchorMargin) {
        if !margin.is_finite() {
            warn!(?margin, "ignoring non-finite anchor margin");
            return;
        }
        self.config.anchor_margin = margin;
    }

    pub fn disable_horizontal_auto_alignment(&mut self) {
        self.config.horizontal_auto_align = false;
    }

    // --- Transitions ---

    /// Open the surface.
    pub fn open(&mut self, options: OpenOptions) {
        match self.state {
            SurfaceState::Opening | SurfaceState::Open => {
                trace!(state = %self.state, "open ignored");
            }
            SurfaceState::Closing => {
                debug!("open interrupts close");
                self.pending = None;
                self.adapter.remove_class(CLASS_ANIMATING_CLOSED);
                self.capture_focusables();
                self.apply_placement();
                self.handlers.acquire(&mut self.adapter);
                self.finish_open(options.focus_index);
            }
            SurfaceState::Closed => {
                self.adapter.save_focus();
                self.focus.mark_saved();
                self.capture_focusables();

                let animated = !self.config.quick_open;
                self.adapter.add_class(CLASS_OPEN);
                if animated {
                    self.adapter.add_class(CLASS_ANIMATING_OPEN);
                }
                self.apply_placement();
                self.handlers.acquire(&mut self.adapter);
                self.state = SurfaceState::Opening;
                debug!(animated, focus_index = ?options.focus_index, "surface opening");

                if animated {
                    self.pending = Some(Pending::Open {
                        deadline: Instant::now() + self.config.open_duration(),
                        focus_index: options.focus_index,
                    });
                } else {
                    self.finish_open(options.focus_index);
                }
            }
        }
    }

    /// Close the surface.
    pub fn close(&mut self) {
        self.begin_close(CloseReason::Programmatic);
    }

    /// Complete the pending transition if its deadline has passed.
    ///
    /// Returns `true` if a transition completed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.pending.is_some_and(|p| p.deadline() <= now);
        due && self.complete_pending()
    }

    /// Deadline of the pending transition, for timer scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(Pending::deadline)
    }

    /// Complete the pending transition now (animation-end event).
    pub fn finish_animation(&mut self) -> bool {
        self.complete_pending()
    }

    /// Recompute and apply the placement while opening or open.
    pub fn reposition(&mut self) {
        if self.state.is_open() {
            self.apply_placement();
        }
    }

    // --- Event handling ---

    /// Keydown inside the surface.
    ///
    /// `target` is the event target, used to find the current item before
    /// falling back to the adapter's focused index.
    pub fn handle_keydown(
        &mut self,
        event: &KeyEvent,
        target: Option<&A::Target>,
    ) -> Option<SurfaceAction> {
        if !self.handlers.registered || !event.is_press() {
            return None;
        }

        if event.code == KeyCode::Escape {
            self.begin_close(CloseReason::Escape);
            return Some(SurfaceAction::Dismissed(CloseReason::Escape));
        }

        if !self.config.focus_list || self.focus.is_empty() {
            return None;
        }

        let current = target
            .and_then(|t| self.adapter.get_index_for_event_target(t))
            .or_else(|| self.adapter.get_focused_item_index());

        let next = match (event.tab_direction(), event.code) {
            (Some(reverse), _) => {
                // Focus is outside the surface; leave Tab alone.
                if current.is_none() && !self.adapter.is_focused() {
                    return None;
                }
                self.focus.step(current, reverse)
            }
            (None, KeyCode::Down) if self.config.arrow_navigation => {
                self.focus.step(current, false)
            }
            (None, KeyCode::Up) if self.config.arrow_navigation => self.focus.step(current, true),
            (None, KeyCode::Home) if self.config.arrow_navigation => Some(0),
            (None, KeyCode::End) if self.config.arrow_navigation => self.focus.last(),
            _ => None,
        }?;

        trace!(from = ?current, to = next, "focus moved");
        self.adapter.focus_item_at_index(next);
        Some(SurfaceAction::FocusMoved(next))
    }

    /// Click inside the surface.
    pub fn handle_click(&mut self, target: &A::Target) -> Option<SurfaceAction> {
        if !self.handlers.registered || !self.config.close_on_item_click {
            return None;
        }
        let index = self.adapter.get_index_for_event_target(target)?;
        let disabled = self
            .adapter
            .get_attribute_for_event_target(target, ATTR_ARIA_DISABLED)
            .is_some_and(|value| value == "true");
        if disabled {
            trace!(index, "click on disabled item ignored");
            return None;
        }
        self.begin_close(CloseReason::ItemSelected(index));
        Some(SurfaceAction::Selected(index))
    }

    /// Click anywhere in the document.
    pub fn handle_body_click(&mut self, target: &A::Target) -> Option<SurfaceAction> {
        if !self.handlers.registered || self.is_inside(target) {
            return None;
        }
        self.begin_close(CloseReason::OutsideClick);
        Some(SurfaceAction::Dismissed(CloseReason::OutsideClick))
    }

    // --- Internals ---

    fn is_inside(&self, target: &A::Target) -> bool {
        if self.adapter.is_surface_root(target) {
            return self.config.root_is_inside;
        }
        self.adapter.is_element_in_container(target)
            || (self.config.exclude_anchor_from_dismiss && self.adapter.is_element_in_anchor(target))
    }

    fn capture_focusables(&mut self) {
        if !self.config.focus_list {
            return;
        }
        self.adapter.capture_focusable_elements();
        self.focus
            .capture(self.adapter.get_number_focusable_elements());
    }

    fn apply_placement(&mut self) {
        let anchor = if self.adapter.has_anchor() {
            self.adapter.get_anchor_dimensions()
        } else {
            trace!("no anchor configured; positioning against parent");
            self.adapter.get_parent_dimensions()
        };
        let geometry = SurfaceGeometry::new(
            anchor,
            self.adapter.get_inner_dimensions(),
            self.adapter.get_window_dimensions(),
        );
        let placement = PlacementOptions::new(self.config.anchor_corner)
            .margin(self.config.anchor_margin)
            .direction(TextDirection::from_rtl(self.adapter.is_rtl()))
            .horizontal_auto_align(self.config.horizontal_auto_align)
            .margin_to_edge(self.config.margin_to_edge)
            .resolve(&geometry);

        self.adapter
            .set_transform_origin(&placement.transform_origin.to_string());
        self.adapter.set_position(&placement.position);
        self.adapter.set_max_height(placement.max_height);
        debug!(
            configured = %self.config.anchor_corner,
            effective = %placement.corner,
            "surface positioned"
        );
        self.placement = Some(placement);
    }

    fn finish_open(&mut self, focus_index: Option<usize>) {
        self.state = SurfaceState::Open;
        match focus_index {
            None => self.adapter.focus(),
            Some(index) if self.config.focus_list && self.focus.contains(index) => {
                self.adapter.focus_item_at_index(index);
            }
            Some(index) => {
                debug!(index, len = self.focus.len(), "focus index out of range; focus unchanged");
            }
        }
        debug!("surface open");
        self.adapter.notify_open();
    }

    fn begin_close(&mut self, reason: CloseReason) {
        match self.state {
            SurfaceState::Closed | SurfaceState::Closing => {
                trace!(state = %self.state, ?reason, "close ignored");
            }
            SurfaceState::Opening => {
                debug!(?reason, "close interrupts open");
                if let Some(pending) = self.pending.take() {
                    self.adapter.remove_class(pending.animating_class());
                }
                self.handlers.release(&mut self.adapter);
                self.finish_close(reason);
            }
            SurfaceState::Open => {
                self.handlers.release(&mut self.adapter);
                self.state = SurfaceState::Closing;
                let animated = !self.config.quick_open;
                debug!(animated, ?reason, "surface closing");
                if animated {
                    self.adapter.add_class(CLASS_ANIMATING_CLOSED);
                    self.pending = Some(Pending::Close {
                        deadline: Instant::now() + self.config.close_duration(),
                        reason,
                    });
                } else {
                    self.finish_close(reason);
                }
            }
        }
    }

    fn finish_close(&mut self, reason: CloseReason) {
        self.state = SurfaceState::Closed;
        self.adapter.remove_class(CLASS_OPEN);
        if self.focus.take_saved() {
            self.adapter.restore_focus();
        }
        self.focus.clear_snapshot();
        debug!(?reason, "surface closed");
        self.adapter.notify_close(reason);
    }

    fn complete_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.adapter.remove_class(pending.animating_class());
        match pending {
            Pending::Open { focus_index, .. } => self.finish_open(focus_index),
            Pending::Close { reason, .. } => self.finish_close(reason),
        }
        true
    }
}

impl<A: SurfaceAdapter> Drop for MenuSurfaceFoundation<A> {
    fn drop(&mut self) {
        self.handlers.release(&mut self.adapter);
    }
}

impl<A: SurfaceAdapter> fmt::Debug for MenuSurfaceFoundation<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuSurfaceFoundation")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("handlers_registered", &self.handlers.registered)
            .field("focus", &self.focus)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;
    use msurf_core::{Modifiers, Rect, Size};
    use msurf_layout::Position;

    /// Minimal adapter: a set of classes, a focus slot, and counters.
    #[derive(Debug, Default)]
    struct Stub {
        classes: Vec<String>,
        items: usize,
        focused_item: Option<usize>,
        surface_focused: bool,
        registered: usize,
        body_registered: bool,
        closes: Vec<CloseReason>,
        opens: usize,
        restores: usize,
        position: Option<Position>,
    }

    impl Stub {
        fn with_items(items: usize) -> Self {
            Self {
                classes: vec![CLASS_ROOT.to_owned()],
                items,
                ..Self::default()
            }
        }
    }

    /// Targets: `0` is the root, `1..=items` are items, anything else is outside.
    impl SurfaceAdapter for Stub {
        type Target = usize;

        fn add_class(&mut self, class: &str) {
            if !self.has_class(class) {
                self.classes.push(class.to_owned());
            }
        }
        fn remove_class(&mut self, class: &str) {
            self.classes.retain(|c| c != class);
        }
        fn has_class(&self, class: &str) -> bool {
            self.classes.iter().any(|c| c == class)
        }
        fn get_attribute_for_event_target(&self, _: &usize, _: &str) -> Option<String> {
            None
        }
        fn get_inner_dimensions(&self) -> Size {
            Size::new(150.0, 100.0)
        }
        fn has_anchor(&self) -> bool {
            true
        }
        fn get_anchor_dimensions(&self) -> Rect {
            Rect::new(300.0, 10.0, 100.0, 20.0)
        }
        fn get_parent_dimensions(&self) -> Rect {
            Rect::default()
        }
        fn get_window_dimensions(&self) -> Size {
            Size::new(320.0, 480.0)
        }
        fn get_number_focusable_elements(&self) -> usize {
            self.items
        }
        fn get_focused_item_index(&self) -> Option<usize> {
            self.focused_item
        }
        fn focus_item_at_index(&mut self, index: usize) {
            self.focused_item = Some(index);
            self.surface_focused = false;
        }
        fn get_index_for_event_target(&self, target: &usize) -> Option<usize> {
            (1..=self.items).contains(target).then(|| target - 1)
        }
        fn register_interaction_handler(&mut self, _: InteractionKind) {
            self.registered += 1;
        }
        fn deregister_interaction_handler(&mut self, _: InteractionKind) {
            self.registered -= 1;
        }
        fn register_body_click_handler(&mut self) {
            self.body_registered = true;
        }
        fn deregister_body_click_handler(&mut self) {
            self.body_registered = false;
        }
        fn notify_close(&mut self, reason: CloseReason) {
            self.closes.push(reason);
        }
        fn notify_open(&mut self) {
            self.opens += 1;
        }
        fn save_focus(&mut self) {}
        fn restore_focus(&mut self) {
            self.restores += 1;
        }
        fn is_focused(&self) -> bool {
            self.surface_focused
        }
        fn is_element_in_container(&self, target: &usize) -> bool {
            *target <= self.items
        }
        fn is_surface_root(&self, target: &usize) -> bool {
            *target == 0
        }
        fn focus(&mut self) {
            self.surface_focused = true;
        }
        fn is_rtl(&self) -> bool {
            false
        }
        fn set_transform_origin(&mut self, _: &str) {}
        fn set_position(&mut self, position: &Position) {
            self.position = Some(*position);
        }
        fn set_max_height(&mut self, _: Option<f64>) {}
    }

    fn quick(items: usize) -> MenuSurfaceFoundation<Stub> {
        let mut f = MenuSurfaceFoundation::with_config(
            Stub::with_items(items),
            SurfaceConfig::default().quick_open(true),
        );
        f.init();
        f
    }

    #[test]
    fn quick_open_and_close_are_synchronous() {
        let mut f = quick(3);
        f.open(OpenOptions::new());
        assert_eq!(f.state(), SurfaceState::Open);
        assert!(f.adapter().has_class(CLASS_OPEN));
        assert!(!f.adapter().has_class(CLASS_ANIMATING_OPEN));
        assert!(f.adapter().surface_focused);

        f.close();
        assert_eq!(f.state(), SurfaceState::Closed);
        assert!(!f.adapter().has_class(CLASS_OPEN));
        assert_eq!(f.adapter().closes, vec![CloseReason::Programmatic]);
        assert_eq!(f.adapter().restores, 1);
    }

    #[test]
    fn animated_open_completes_on_tick() {
        let mut f = MenuSurfaceFoundation::new(Stub::with_items(2));
        f.init();
        f.open(OpenOptions::new().focus_index(1));
        assert_eq!(f.state(), SurfaceState::Opening);
        assert!(f.adapter().has_class(CLASS_ANIMATING_OPEN));

        let deadline = f.next_deadline().expect("pending open");
        assert!(!f.tick(deadline - Duration::from_millis(1)));
        assert!(f.tick(deadline));
        assert_eq!(f.state(), SurfaceState::Open);
        assert!(!f.adapter().has_class(CLASS_ANIMATING_OPEN));
        assert_eq!(f.adapter().focused_item, Some(1));
        assert_eq!(f.next_deadline(), None);
    }

    #[test]
    fn close_during_opening_jumps_to_closed() {
        let mut f = MenuSurfaceFoundation::new(Stub::with_items(2));
        f.init();
        f.open(OpenOptions::new());
        f.close();
        assert_eq!(f.state(), SurfaceState::Closed);
        assert!(!f.handlers_registered());
        assert!(f.adapter().classes.iter().all(|c| c == CLASS_ROOT));
        assert_eq!(f.adapter().opens, 0);
        assert_eq!(f.adapter().closes.len(), 1);
    }

    #[test]
    fn open_during_closing_jumps_to_open() {
        let mut f = MenuSurfaceFoundation::new(Stub::with_items(2));
        f.init();
        f.open(OpenOptions::new());
        f.finish_animation();
        f.close();
        assert_eq!(f.state(), SurfaceState::Closing);
        f.open(OpenOptions::new());
        assert_eq!(f.state(), SurfaceState::Open);
        assert!(f.handlers_registered());
        assert!(!f.adapter().has_class(CLASS_ANIMATING_CLOSED));
        assert!(f.adapter().has_class(CLASS_OPEN));
        assert!(f.adapter().closes.is_empty());
    }

    #[test]
    fn anchor_near_edge_flips_to_right() {
        let mut f = quick(0);
        f.set_anchor_corner(Corner::TOP_LEFT);
        f.open(OpenOptions::new());
        let position = f.adapter().position.expect("position applied");
        assert!(position.right().is_some());
        assert!(position.left().is_none());
    }

    #[test]
    fn escape_dismisses() {
        let mut f = quick(2);
        f.open(OpenOptions::new());
        let action = f.handle_keydown(&KeyEvent::new(KeyCode::Escape), None);
        assert_eq!(action, Some(SurfaceAction::Dismissed(CloseReason::Escape)));
        assert_eq!(f.adapter().closes, vec![CloseReason::Escape]);
    }

    #[test]
    fn tab_wraps_from_last_item() {
        let mut f = quick(3);
        f.open(OpenOptions::new().focus_index(2));
        let action = f.handle_keydown(&KeyEvent::new(KeyCode::Tab), None);
        assert_eq!(action, Some(SurfaceAction::FocusMoved(0)));

        let shift_tab = KeyEvent::new(KeyCode::Tab).with_modifiers(Modifiers::SHIFT);
        let action = f.handle_keydown(&shift_tab, None);
        assert_eq!(action, Some(SurfaceAction::FocusMoved(2)));
    }

    #[test]
    fn body_click_inside_is_ignored() {
        let mut f = quick(2);
        f.open(OpenOptions::new());
        assert_eq!(f.handle_body_click(&0), None);
        assert_eq!(f.handle_body_click(&1), None);
        assert_eq!(
            f.handle_body_click(&99),
            Some(SurfaceAction::Dismissed(CloseReason::OutsideClick))
        );
        assert_eq!(f.handle_body_click(&99), None);
    }

    #[test]
    fn non_finite_margin_is_rejected() {
        let mut f = quick(0);
        f.set_anchor_margin(AnchorMargin::new().top(4.0));
        f.set_anchor_margin(AnchorMargin::new().top(f64::NAN));
        assert_eq!(f.config().anchor_margin.top, 4.0);
    }

    #[tracing_test::traced_test]
    #[test]
    fn init_warns_about_missing_root_class() {
        let mut stub = Stub::with_items(0);
        stub.classes.clear();
        let mut f = MenuSurfaceFoundation::new(stub);
        f.init();
        assert!(f.adapter().has_class(CLASS_ROOT));
        assert!(logs_contain("lacks root class"));
    }

    #[tracing_test::traced_test]
    #[test]
    fn rejected_margin_is_logged() {
        let mut f = quick(0);
        f.set_anchor_margin(AnchorMargin::uniform(f64::INFINITY));
        assert!(logs_contain("ignoring non-finite anchor margin"));
    }

    #[test]
    fn invalid_config_falls_back_to_preset() {
        let config = SurfaceConfig::temporary_surface().margin_to_edge(f64::NAN);
        let f = MenuSurfaceFoundation::with_config(Stub::with_items(0), config);
        assert_eq!(f.config(), &SurfaceConfig::temporary_surface());
    }

    #[test]
    fn destroy_releases_handlers_without_notifying() {
        let mut f = quick(1);
        f.open(OpenOptions::new());
        assert!(f.adapter().body_registered);
        f.destroy();
        assert!(!f.adapter().body_registered);
        assert_eq!(f.adapter().registered, 0);
        assert_eq!(f.state(), SurfaceState::Closed);
        assert!(f.adapter().closes.is_empty());
    }
}
