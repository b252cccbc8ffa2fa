//! Input and render-loop host for an external canvas render controller.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It binds a
//! canvas element to the `RenderController` exported by the `render_web`
//! package, translates mouse drags into pan and zoom commands, and drives a
//! short animation-frame loop that repaints after input and then idles. The
//! controller owns rendering and all transform math; this crate only owns the
//! coordination between DOM events and controller calls.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`router`] | Testable [`router::RouterCore`]: drag state machine and loop driver |
//! | [`controller`] | [`controller::Controller`] seam and the one-shot init slot |
//! | [`render_loop`] | Bounded frame counter and pending-frame handle |
//! | [`input`] | Pointer, button, modifier, and key types |
//! | [`config`] | JSON host configuration |
//! | [`error`] | Error types |
//! | [`consts`] | Defaults (frame budget, canvas id, drag cursor) |
//! | `host` | Browser glue and the exported `start` entry point (wasm32 only) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod host;
pub mod input;
pub mod render_loop;
pub mod router;
