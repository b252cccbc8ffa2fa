//! Shared constants for the render host.

// ── Bootstrap ───────────────────────────────────────────────────

/// Element id of the canvas the controller is bound to.
pub const DEFAULT_CANVAS_ID: &str = "canvas";

/// First argument passed to the controller factory. The shipped
/// `RenderController` treats it as the raw window handle id, so the canvas
/// needs a matching `data-raw-handle` attribute.
pub const DEFAULT_QUALITY: u32 = 1;

// ── Render loop ─────────────────────────────────────────────────

/// Frames rendered after a (re)start before the loop goes idle.
pub const DEFAULT_FRAME_BUDGET: u32 = 3;

// ── Input ───────────────────────────────────────────────────────

/// Cursor style applied to the canvas while a drag is in progress.
pub const DEFAULT_DRAG_CURSOR: &str = "";

/// Key that asks the controller to swap its source image.
pub const SWAP_IMAGE_KEY: &str = " ";

// ── Logging ─────────────────────────────────────────────────────

pub const DEFAULT_LOG_LEVEL: &str = "info";
