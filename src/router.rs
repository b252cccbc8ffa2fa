//! Input router: turns pointer, key, and resize events into controller
//! commands and drives the bounded render loop.
//!
//! `RouterCore` holds every piece of state the DOM callbacks share (controller
//! slot, loop bookkeeping, drag session, recorded cursor) and has no browser
//! dependency, so the whole coordination contract runs under plain
//! `cargo test`. The browser `Host` feeds it events and carries out the
//! returned [`Action`]s.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::config::HostConfig;
use crate::consts::{DEFAULT_DRAG_CURSOR, DEFAULT_FRAME_BUDGET, SWAP_IMAGE_KEY};
use crate::controller::{Controller, ControllerSlot};
use crate::error::RouterError;
use crate::input::{Button, DragCommand, Key, Modifiers, Point, PointerState};
use crate::render_loop::{FrameHandle, RenderLoop};

/// Side effects the host must carry out after a handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set the canvas `style.cursor`.
    SetCursor(String),
    /// Schedule the next animation frame and report the handle back via
    /// [`RouterCore::frame_scheduled`].
    RequestFrame,
}

pub struct RouterCore<C> {
    pub controller: ControllerSlot<C>,
    pub render_loop: RenderLoop,
    pub pointer: PointerState,
    prior_cursor: String,
    drag_cursor: String,
}

impl<C> Default for RouterCore<C> {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_BUDGET, DEFAULT_DRAG_CURSOR)
    }
}

impl<C> RouterCore<C> {
    #[must_use]
    pub fn new(frame_budget: u32, drag_cursor: impl Into<String>) -> Self {
        Self {
            controller: ControllerSlot::Pending,
            render_loop: RenderLoop::new(frame_budget),
            pointer: PointerState::Idle,
            prior_cursor: String::new(),
            drag_cursor: drag_cursor.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &HostConfig) -> Self {
        Self::new(config.frame_budget, config.drag_cursor.clone())
    }
}

impl<C: Controller> RouterCore<C> {
    // --- Bootstrap ---

    /// The controller factory resolved. Starts the first render loop.
    pub fn on_ready(&mut self, controller: C) -> Vec<Action> {
        self.controller = ControllerSlot::Ready(controller);
        self.render_loop.reset();
        if self.render_loop.is_idle() {
            vec![Action::RequestFrame]
        } else {
            Vec::new()
        }
    }

    /// The controller factory rejected. Later calls report `InitFailed`.
    pub fn on_init_failed(&mut self, reason: impl Into<String>) {
        self.controller = ControllerSlot::Failed(reason.into());
    }

    // --- Render loop ---

    /// Animation-frame callback: render once and decide whether to continue.
    ///
    /// On error the loop is left idle so the next input restarts it.
    pub fn on_frame(&mut self) -> Result<Vec<Action>, RouterError> {
        self.render_loop.abandon();
        self.controller.get_mut()?.render()?;
        if self.render_loop.advance() {
            Ok(vec![Action::RequestFrame])
        } else {
            log::debug!("render loop idle after {} frames", self.render_loop.frames());
            Ok(Vec::new())
        }
    }

    /// The host obtained a handle for a requested frame.
    pub fn frame_scheduled(&mut self, handle: FrameHandle) {
        self.render_loop.scheduled(handle);
    }

    /// The host could not request a frame.
    pub fn frame_unavailable(&mut self) {
        self.render_loop.abandon();
    }

    // --- Pointer input ---

    /// Primary-button press starts a drag: record the cursor and hide it.
    ///
    /// `current_cursor` is the canvas's cursor style at the time of the
    /// press. A second press while already dragging keeps the first record.
    pub fn on_pointer_down(&mut self, button: Button, current_cursor: &str) -> Result<Vec<Action>, RouterError> {
        if button != Button::Primary {
            return Ok(Vec::new());
        }
        self.controller.get_mut()?;
        if self.pointer.is_dragging() {
            return Ok(Vec::new());
        }
        current_cursor.clone_into(&mut self.prior_cursor);
        self.pointer = PointerState::Dragging;
        Ok(vec![Action::SetCursor(self.drag_cursor.clone())])
    }

    /// Forward a drag move as a pan or (with ctrl) a zoom command.
    pub fn on_pointer_move(&mut self, point: Point, modifiers: Modifiers) -> Result<Vec<Action>, RouterError> {
        if !self.pointer.is_dragging() {
            return Ok(Vec::new());
        }
        let controller = self.controller.get_mut()?;
        match DragCommand::for_modifiers(modifiers) {
            DragCommand::Zoom => controller.update_zoom(point.x, point.y)?,
            DragCommand::Position => controller.update_position(point.x, point.y)?,
        }
        self.kick()
    }

    /// Any button release ends the drag, clears the controller anchor, and
    /// restores the recorded cursor, whether or not a drag was in progress.
    ///
    /// The cursor restore is returned even when `clear_anchor` fails, so a
    /// throwing controller never leaves the drag cursor in place. Before the
    /// controller exists no drag can have started and nothing is restored.
    pub fn on_pointer_up(&mut self) -> (Vec<Action>, Result<(), RouterError>) {
        self.pointer = PointerState::Idle;
        let controller = match self.controller.get_mut() {
            Ok(controller) => controller,
            Err(err) => return (Vec::new(), Err(err)),
        };
        let cleared = controller.clear_anchor().map_err(RouterError::from);
        (vec![Action::SetCursor(self.prior_cursor.clone())], cleared)
    }

    // --- Keyboard / viewport ---

    /// Space swaps the controller's source image. Auto-repeats of a held key
    /// and all other keys are ignored.
    pub fn on_key_down(&mut self, key: &Key, repeat: bool) -> Result<Vec<Action>, RouterError> {
        if repeat || key.0 != SWAP_IMAGE_KEY {
            return Ok(Vec::new());
        }
        self.controller.get_mut()?.swap_image()?;
        self.kick()
    }

    /// Forward new canvas client dimensions. Zero-sized layouts are skipped.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<Vec<Action>, RouterError> {
        if width == 0 || height == 0 {
            return Ok(Vec::new());
        }
        self.controller.get_mut()?.set_viewport_size(width, height)?;
        self.kick()
    }

    // --- Queries ---

    #[must_use]
    pub fn is_loop_idle(&self) -> bool {
        self.render_loop.is_idle()
    }

    #[must_use]
    pub fn frames(&self) -> u32 {
        self.render_loop.frames()
    }

    /// New input: grant a fresh frame budget, restarting the loop in place
    /// if it had gone idle.
    fn kick(&mut self) -> Result<Vec<Action>, RouterError> {
        self.render_loop.reset();
        if self.render_loop.is_idle() {
            self.on_frame()
        } else {
            Ok(Vec::new())
        }
    }
}
