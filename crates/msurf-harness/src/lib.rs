#![forbid(unsafe_code)]

//! Test harness for msurf surfaces.
//!
//! [`RecordingAdapter`] is an in-memory [`SurfaceAdapter`] over a tiny fake
//! element tree. It keeps live state (classes, focus, registered handlers,
//! applied styles) and an ordered [`Call`] log, so tests can assert both the
//! end state and the sequence of host calls.
//!
//! ```ignore
//! let mut surface = msurf_harness::surface(
//!     RecordingAdapter::new().with_items(3),
//!     SurfaceConfig::menu_surface().quick_open(true),
//! );
//! surface.open(OpenOptions::new().focus_index(0));
//! assert_eq!(surface.adapter().focused(), Focused::Item(0));
//! ```

use std::collections::BTreeSet;
use std::sync::Once;

use msurf_core::{Rect, Size};
use msurf_layout::Position;
use msurf_widgets::surface::{
    ATTR_ARIA_DISABLED, CLASS_ROOT, CloseReason, InteractionKind, MenuSurfaceFoundation,
    SurfaceAdapter, SurfaceConfig,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install a `fmt` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs. Filter
/// directives come from `MSURF_LOG` (e.g. `msurf_widgets=debug,warn`) and
/// default to `warn`.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(test_filter())
            .with(fmt::layer().with_test_writer())
            .try_init();
    });
}

/// Filter parsed from `MSURF_LOG`, or `warn` when unset or invalid.
pub fn test_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Environment variable holding the test log filter.
pub const LOG_ENV: &str = "MSURF_LOG";

/// Build a foundation over `adapter` and run `init()`.
pub fn surface(
    adapter: RecordingAdapter,
    config: SurfaceConfig,
) -> MenuSurfaceFoundation<RecordingAdapter> {
    init_test_logging();
    let mut foundation = MenuSurfaceFoundation::with_config(adapter, config);
    foundation.init();
    foundation
}

// ============================================================================
// Fake element tree
// ============================================================================

/// Event targets in the fake document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    /// The surface element itself.
    Root,
    /// Focusable item `i` inside the surface.
    Item(usize),
    /// Non-focusable content inside the surface.
    Content,
    /// The anchor element.
    Anchor,
    /// Anything else in the document.
    Outside(u32),
}

/// Where focus currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focused {
    /// An element outside the surface (the opener, typically).
    #[default]
    Outside,
    Surface,
    Item(usize),
}

/// One adapter call, in the order the foundation made it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AddClass(String),
    RemoveClass(String),
    CaptureFocusables,
    FocusItem(usize),
    Focus,
    SaveFocus,
    RestoreFocus,
    RegisterInteraction(InteractionKind),
    DeregisterInteraction(InteractionKind),
    RegisterBodyClick,
    DeregisterBodyClick,
    NotifyOpen,
    NotifyClose(CloseReason),
    SetTransformOrigin(String),
    SetPosition(Position),
    SetMaxHeight(Option<f64>),
}

/// Recording [`SurfaceAdapter`].
#[derive(Debug, Clone)]
pub struct RecordingAdapter {
    classes: BTreeSet<String>,
    calls: Vec<Call>,

    surface_size: Size,
    anchor: Option<Rect>,
    parent: Rect,
    window: Size,
    rtl: bool,

    items: Vec<bool>,
    focused: Focused,
    saved: Option<Focused>,
    saved_attached: bool,

    /// Element listeners by DOM event type.
    listeners: BTreeSet<&'static str>,
    body_click: bool,

    closes: Vec<CloseReason>,
    opens: usize,

    transform_origin: Option<String>,
    position: Option<Position>,
    max_height: Option<f64>,
}

impl Default for RecordingAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingAdapter {
    /// A root-classed surface of 200x300 in a 1024x768 window, no anchor,
    /// no items.
    pub fn new() -> Self {
        Self {
            classes: BTreeSet::from([CLASS_ROOT.to_owned()]),
            calls: Vec::new(),
            surface_size: Size::new(200.0, 300.0),
            anchor: None,
            parent: Rect::new(0.0, 0.0, 0.0, 0.0),
            window: Size::new(1024.0, 768.0),
            rtl: false,
            items: Vec::new(),
            focused: Focused::Outside,
            saved: None,
            saved_attached: true,
            listeners: BTreeSet::new(),
            body_click: false,
            closes: Vec::new(),
            opens: 0,
            transform_origin: None,
            position: None,
            max_height: None,
        }
    }

    // --- Builders ---

    pub fn with_items(mut self, count: usize) -> Self {
        self.items = vec![false; count];
        self
    }

    pub fn with_disabled_item(mut self, index: usize) -> Self {
        if let Some(disabled) = self.items.get_mut(index) {
            *disabled = true;
        }
        self
    }

    pub fn with_anchor(mut self, anchor: Rect) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_parent(mut self, parent: Rect) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_surface_size(mut self, size: Size) -> Self {
        self.surface_size = size;
        self
    }

    pub fn with_window(mut self, window: Size) -> Self {
        self.window = window;
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn without_root_class(mut self) -> Self {
        self.classes.remove(CLASS_ROOT);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_owned());
        self
    }

    // --- Mutation from tests ---

    /// Simulate the saved element being removed from the document.
    pub fn detach_saved_focus(&mut self) {
        self.saved_attached = false;
    }

    pub fn set_focused(&mut self, focused: Focused) {
        self.focused = focused;
    }

    pub fn set_window(&mut self, window: Size) {
        self.window = window;
    }

    pub fn set_anchor(&mut self, anchor: Option<Rect>) {
        self.anchor = anchor;
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    // --- Inspection ---

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn focused(&self) -> Focused {
        self.focused
    }

    pub fn closes(&self) -> &[CloseReason] {
        &self.closes
    }

    pub fn opens(&self) -> usize {
        self.opens
    }

    /// Whether an element listener for `event_type` (`"keydown"`, ...) is live.
    pub fn listens_to(&self, event_type: &str) -> bool {
        self.listeners.contains(event_type)
    }

    /// All interaction handlers and the body-click handler are registered.
    pub fn handlers_registered(&self) -> bool {
        self.body_click
            && InteractionKind::ALL
                .iter()
                .all(|k| self.listens_to(k.event_type()))
    }

    /// No handler of any kind is registered.
    pub fn handlers_released(&self) -> bool {
        !self.body_click && self.listeners.is_empty()
    }

    pub fn transform_origin(&self) -> Option<&str> {
        self.transform_origin.as_deref()
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn max_height(&self) -> Option<f64> {
        self.max_height
    }
}

impl SurfaceAdapter for RecordingAdapter {
    type Target = Node;

    fn add_class(&mut self, class: &str) {
        self.calls.push(Call::AddClass(class.to_owned()));
        self.classes.insert(class.to_owned());
    }

    fn remove_class(&mut self, class: &str) {
        self.calls.push(Call::RemoveClass(class.to_owned()));
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn get_attribute_for_event_target(&self, target: &Node, name: &str) -> Option<String> {
        match target {
            Node::Item(i) if name == ATTR_ARIA_DISABLED => self
                .items
                .get(*i)
                .map(|disabled| disabled.to_string()),
            _ => None,
        }
    }

    fn get_inner_dimensions(&self) -> Size {
        self.surface_size
    }

    fn has_anchor(&self) -> bool {
        self.anchor.is_some()
    }

    fn get_anchor_dimensions(&self) -> Rect {
        self.anchor.unwrap_or_default()
    }

    fn get_parent_dimensions(&self) -> Rect {
        self.parent
    }

    fn get_window_dimensions(&self) -> Size {
        self.window
    }

    fn capture_focusable_elements(&mut self) {
        self.calls.push(Call::CaptureFocusables);
    }

    fn get_number_focusable_elements(&self) -> usize {
        self.items.len()
    }

    fn get_focused_item_index(&self) -> Option<usize> {
        match self.focused {
            Focused::Item(i) => Some(i),
            _ => None,
        }
    }

    fn focus_item_at_index(&mut self, index: usize) {
        self.calls.push(Call::FocusItem(index));
        self.focused = Focused::Item(index);
    }

    fn get_index_for_event_target(&self, target: &Node) -> Option<usize> {
        match target {
            Node::Item(i) if *i < self.items.len() => Some(*i),
            _ => None,
        }
    }

    fn register_interaction_handler(&mut self, kind: InteractionKind) {
        self.calls.push(Call::RegisterInteraction(kind));
        self.listeners.insert(kind.event_type());
    }

    fn deregister_interaction_handler(&mut self, kind: InteractionKind) {
        self.calls.push(Call::DeregisterInteraction(kind));
        self.listeners.remove(kind.event_type());
    }

    fn register_body_click_handler(&mut self) {
        self.calls.push(Call::RegisterBodyClick);
        self.body_click = true;
    }

    fn deregister_body_click_handler(&mut self) {
        self.calls.push(Call::DeregisterBodyClick);
        self.body_click = false;
    }

    fn notify_close(&mut self, reason: CloseReason) {
        self.calls.push(Call::NotifyClose(reason));
        self.closes.push(reason);
    }

    fn notify_open(&mut self) {
        self.calls.push(Call::NotifyOpen);
        self.opens += 1;
    }

    fn save_focus(&mut self) {
        self.calls.push(Call::SaveFocus);
        self.saved = Some(self.focused);
        self.saved_attached = true;
    }

    fn restore_focus(&mut self) {
        self.calls.push(Call::RestoreFocus);
        if let Some(saved) = self.saved.take()
            && self.saved_attached
        {
            self.focused = saved;
        }
    }

    fn is_focused(&self) -> bool {
        self.focused == Focused::Surface
    }

    fn is_element_in_container(&self, target: &Node) -> bool {
        matches!(target, Node::Root | Node::Item(_) | Node::Content)
    }

    fn is_surface_root(&self, target: &Node) -> bool {
        *target == Node::Root
    }

    fn is_element_in_anchor(&self, target: &Node) -> bool {
        *target == Node::Anchor
    }

    fn focus(&mut self) {
        self.calls.push(Call::Focus);
        self.focused = Focused::Surface;
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn set_transform_origin(&mut self, origin: &str) {
        self.calls.push(Call::SetTransformOrigin(origin.to_owned()));
        self.transform_origin = Some(origin.to_owned());
    }

    fn set_position(&mut self, position: &Position) {
        self.calls.push(Call::SetPosition(*position));
        self.position = Some(*position);
    }

    fn set_max_height(&mut self, height: Option<f64>) {
        self.calls.push(Call::SetMaxHeight(height));
        self.max_height = height;
    }
}
