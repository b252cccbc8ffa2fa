//! Bounded render loop bookkeeping.
//!
//! The loop renders a fixed number of frames after each (re)start and then
//! goes idle so a static scene costs nothing. `handle` is the pending
//! animation-frame request; `None` means idle, and only an idle loop may be
//! restarted.

#[cfg(test)]
#[path = "render_loop_test.rs"]
mod render_loop_test;

/// Id returned by `requestAnimationFrame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

#[derive(Debug, Clone)]
pub struct RenderLoop {
    budget: u32,
    frames: u32,
    handle: Option<FrameHandle>,
}

impl RenderLoop {
    /// A loop that renders `budget` frames per start. A zero budget is
    /// treated as one.
    #[must_use]
    pub fn new(budget: u32) -> Self {
        Self { budget: budget.max(1), frames: 0, handle: None }
    }

    #[must_use]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.handle.is_none()
    }

    /// New input arrived: grant a fresh budget.
    pub fn reset(&mut self) {
        self.frames = 0;
    }

    /// A frame fired. Consumes the pending handle and counts the frame;
    /// returns whether another frame should be requested.
    pub fn advance(&mut self) -> bool {
        self.handle = None;
        self.frames = self.frames.saturating_add(1);
        self.frames < self.budget
    }

    /// The host scheduled the next frame.
    pub fn scheduled(&mut self, handle: FrameHandle) {
        self.handle = Some(handle);
    }

    /// The host could not schedule a frame; the loop is idle.
    pub fn abandon(&mut self) {
        self.handle = None;
    }
}

#[cfg(test)]
impl RenderLoop {
    pub(crate) fn budget(&self) -> u32 {
        self.budget
    }

    pub(crate) fn handle(&self) -> Option<FrameHandle> {
        self.handle
    }
}
