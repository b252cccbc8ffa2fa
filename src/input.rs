//! Input model: pointer coordinates, modifier keys, buttons, and the drag state machine.
//!
//! `Point`, `Button`, and `Modifiers` capture what a DOM event carried at the
//! time it fired. `PointerState` is the drag session tracked between
//! pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Canvas-local position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Modifier keys held during a pointer event. Only ctrl changes routing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl key is held. Switches drags from pan to zoom.
    pub ctrl: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Unknown codes (back/forward) fall
    /// back to `Secondary` so they never start a drag.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            _ => Self::Secondary,
        }
    }
}

/// A keyboard key as reported by `KeyboardEvent.key` (e.g. `" "`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Drag state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    /// No drag in progress; moves are ignored.
    #[default]
    Idle,
    /// Primary button is held; moves are forwarded to the controller.
    Dragging,
}

impl PointerState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }
}

/// Which controller command a drag move turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragCommand {
    /// Pan the view.
    Position,
    /// Zoom anchored at the pointer.
    Zoom,
}

impl DragCommand {
    /// Ctrl turns a pan drag into a zoom drag.
    #[must_use]
    pub fn for_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.ctrl { Self::Zoom } else { Self::Position }
    }
}
