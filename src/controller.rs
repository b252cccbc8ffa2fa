//! The external render controller seam and its one-shot initialization slot.
//!
//! The controller owns rendering, zoom, and pan; this crate only forwards
//! commands to it. `ControllerSlot` models the asynchronous construction so a
//! call made before the factory resolves is an error value instead of a null
//! dereference.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::error::{ControllerError, RouterError};

/// Operations consumed from the external render controller.
pub trait Controller {
    /// Paint the current state to the bound canvas.
    fn render(&mut self) -> Result<(), ControllerError>;

    /// Pan the view to canvas-local coordinates.
    fn update_position(&mut self, x: f64, y: f64) -> Result<(), ControllerError>;

    /// Zoom anchored at canvas-local coordinates.
    fn update_zoom(&mut self, x: f64, y: f64) -> Result<(), ControllerError>;

    /// Drop any pending relative anchor. Must tolerate no anchor being set.
    fn clear_anchor(&mut self) -> Result<(), ControllerError>;

    /// Swap to the controller's alternate source image.
    fn swap_image(&mut self) -> Result<(), ControllerError>;

    /// Resize the render target.
    fn set_viewport_size(&mut self, width: u32, height: u32) -> Result<(), ControllerError>;
}

/// One-shot holder for the asynchronously constructed controller.
#[derive(Debug, Default)]
pub enum ControllerSlot<C> {
    /// Factory has not resolved yet.
    #[default]
    Pending,
    /// Factory resolved; the controller is usable for the page lifetime.
    Ready(C),
    /// Factory rejected with the given reason.
    Failed(String),
}

impl<C> ControllerSlot<C> {
    #[cfg(test)]
    pub(crate) fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Borrow the controller, or report why it is unavailable.
    pub fn get_mut(&mut self) -> Result<&mut C, RouterError> {
        match self {
            Self::Ready(controller) => Ok(controller),
            Self::Pending => Err(RouterError::NotInitialized),
            Self::Failed(reason) => Err(RouterError::InitFailed(reason.clone())),
        }
    }

    #[must_use]
    pub fn get(&self) -> Option<&C> {
        match self {
            Self::Ready(controller) => Some(controller),
            Self::Pending | Self::Failed(_) => None,
        }
    }
}
