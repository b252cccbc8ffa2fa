//! Browser host: binds the DOM canvas and the imported `RenderController` to
//! [`RouterCore`].
//!
//! The host owns everything that touches the browser: the canvas element,
//! the window, the per-frame closure, and the DOM event closures. Each
//! callback borrows the core, runs one handler, drops the borrow, and then
//! carries out the returned [`Action`]s. Handler errors are logged and the
//! page keeps running; startup errors reject the promise returned by
//! [`start`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, Window};

use crate::config::HostConfig;
use crate::consts::SWAP_IMAGE_KEY;
use crate::controller::Controller;
use crate::error::{ControllerError, HostError, RouterError};
use crate::input::{Button, Key, Modifiers, Point};
use crate::render_loop::FrameHandle;
use crate::router::{Action, RouterCore};

#[wasm_bindgen(module = "render_web")]
extern "C" {
    /// Render controller class exported by the `render_web` package.
    pub type RenderController;

    /// `quality` is the factory's first argument. The shipped controller
    /// reads it as the raw window handle id, so the canvas must carry a
    /// matching `data-raw-handle` attribute.
    #[wasm_bindgen(static_method_of = RenderController, js_name = "new", catch)]
    fn create(quality: u32, width: u32, height: u32) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn render(this: &RenderController) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn update_position(this: &RenderController, x: f64, y: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn update_zoom(this: &RenderController, x: f64, y: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn clear_anchor(this: &RenderController) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn swap_image(this: &RenderController) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn set_viewport_size(this: &RenderController, width: u32, height: u32) -> Result<(), JsValue>;
}

/// A resolved `RenderController` behind the [`Controller`] seam.
pub struct BoundController {
    inner: RenderController,
}

impl Controller for BoundController {
    fn render(&mut self) -> Result<(), ControllerError> {
        self.inner.render().map_err(|err| js_failure("render", &err))
    }

    fn update_position(&mut self, x: f64, y: f64) -> Result<(), ControllerError> {
        self.inner.update_position(x, y).map_err(|err| js_failure("update_position", &err))
    }

    fn update_zoom(&mut self, x: f64, y: f64) -> Result<(), ControllerError> {
        self.inner.update_zoom(x, y).map_err(|err| js_failure("update_zoom", &err))
    }

    fn clear_anchor(&mut self) -> Result<(), ControllerError> {
        self.inner.clear_anchor().map_err(|err| js_failure("clear_anchor", &err))
    }

    fn swap_image(&mut self) -> Result<(), ControllerError> {
        self.inner.swap_image().map_err(|err| js_failure("swap_image", &err))
    }

    fn set_viewport_size(&mut self, width: u32, height: u32) -> Result<(), ControllerError> {
        self.inner
            .set_viewport_size(width, height)
            .map_err(|err| js_failure("set_viewport_size", &err))
    }
}

/// Await the asynchronous controller factory.
async fn construct(quality: u32, width: u32, height: u32) -> Result<BoundController, ControllerError> {
    let promise = RenderController::create(quality, width, height).map_err(|err| js_failure("new", &err))?;
    let value = JsFuture::from(promise).await.map_err(|err| js_failure("new", &err))?;
    Ok(BoundController { inner: value.unchecked_into::<RenderController>() })
}

fn js_failure(op: &'static str, err: &JsValue) -> ControllerError {
    ControllerError::new(op, js_error_message(err))
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{err:?}"),
    }
}

/// Keys typed into form fields or editable content belong to the page.
fn targets_editable(ev: &KeyboardEvent) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    let Some(element) = target.dyn_ref::<HtmlElement>() else {
        return false;
    };
    element.is_content_editable() || matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
}

fn client_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let width = u32::try_from(canvas.client_width()).unwrap_or(0);
    let height = u32::try_from(canvas.client_height()).unwrap_or(0);
    (width, height)
}

struct Host {
    window: Window,
    canvas: HtmlCanvasElement,
    core: RefCell<RouterCore<BoundController>>,
    frame_cb: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    mouse_cbs: RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>>,
    key_cb: RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>,
    resize_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Host {
    fn new(window: Window, canvas: HtmlCanvasElement, core: RouterCore<BoundController>) -> Self {
        Self {
            window,
            canvas,
            core: RefCell::new(core),
            frame_cb: RefCell::new(None),
            mouse_cbs: RefCell::new(Vec::new()),
            key_cb: RefCell::new(None),
            resize_cb: RefCell::new(None),
        }
    }

    /// Register the frame callback and DOM handlers. The closures hold the
    /// host for the lifetime of the page. Window listeners are added, not
    /// assigned, so handlers the page installed itself keep running.
    fn install(self: &Rc<Self>) -> Result<(), HostError> {
        let host = Rc::clone(self);
        *self.frame_cb.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_ts: f64| host.on_frame()));

        let host = Rc::clone(self);
        let down = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| host.on_mouse_down(&ev));
        self.canvas.set_onmousedown(Some(down.as_ref().unchecked_ref()));

        let host = Rc::clone(self);
        let mv = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| host.on_mouse_move(&ev));
        self.canvas.set_onmousemove(Some(mv.as_ref().unchecked_ref()));

        let host = Rc::clone(self);
        let up = Closure::<dyn FnMut(MouseEvent)>::new(move |_ev: MouseEvent| host.on_mouse_up());
        self.canvas.set_onmouseup(Some(up.as_ref().unchecked_ref()));

        self.mouse_cbs.borrow_mut().extend([down, mv, up]);

        let host = Rc::clone(self);
        let key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| host.on_key_down(&ev));
        self.listen("keydown", key.as_ref().unchecked_ref())?;
        *self.key_cb.borrow_mut() = Some(key);

        let host = Rc::clone(self);
        let resize = Closure::<dyn FnMut()>::new(move || host.on_resize());
        self.listen("resize", resize.as_ref().unchecked_ref())?;
        *self.resize_cb.borrow_mut() = Some(resize);
        Ok(())
    }

    fn listen(&self, event: &'static str, callback: &js_sys::Function) -> Result<(), HostError> {
        self.window
            .add_event_listener_with_callback(event, callback)
            .map_err(|err| HostError::Listener { event, message: js_error_message(&err) })
    }

    // --- Callbacks ---

    fn on_frame(&self) {
        let result = self.core.borrow_mut().on_frame();
        self.dispatch("frame", result);
    }

    fn on_mouse_down(&self, ev: &MouseEvent) {
        let cursor = self.cursor();
        let result = self.core.borrow_mut().on_pointer_down(Button::from_dom(ev.button()), &cursor);
        self.dispatch("mousedown", result);
    }

    fn on_mouse_move(&self, ev: &MouseEvent) {
        let point = Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        let modifiers = Modifiers { ctrl: ev.ctrl_key() };
        let result = self.core.borrow_mut().on_pointer_move(point, modifiers);
        self.dispatch("mousemove", result);
    }

    fn on_mouse_up(&self) {
        let (actions, cleared) = self.core.borrow_mut().on_pointer_up();
        self.apply(actions);
        if let Err(err) = cleared {
            log::warn!("mouseup: {err}");
        }
    }

    fn on_key_down(&self, ev: &KeyboardEvent) {
        if targets_editable(ev) {
            return;
        }
        let key = Key(ev.key());
        if key.0 == SWAP_IMAGE_KEY {
            ev.prevent_default();
        }
        let result = self.core.borrow_mut().on_key_down(&key, ev.repeat());
        self.dispatch("keydown", result);
    }

    fn on_resize(&self) {
        let (width, height) = client_size(&self.canvas);
        let result = self.core.borrow_mut().on_resize(width, height);
        self.dispatch("resize", result);
    }

    // --- Actions ---

    fn dispatch(&self, event: &str, result: Result<Vec<Action>, RouterError>) {
        match result {
            Ok(actions) => self.apply(actions),
            Err(err) => log::warn!("{event}: {err}"),
        }
    }

    fn apply(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::SetCursor(cursor) => self.set_cursor(&cursor),
                Action::RequestFrame => self.request_frame(),
            }
        }
    }

    fn request_frame(&self) {
        let requested = match self.frame_cb.borrow().as_ref() {
            Some(cb) => self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|err| js_error_message(&err)),
            None => Err("frame callback not installed".to_owned()),
        };
        match requested {
            Ok(id) => self.core.borrow_mut().frame_scheduled(FrameHandle(id)),
            Err(message) => {
                log::warn!("requestAnimationFrame failed: {message}");
                self.core.borrow_mut().frame_unavailable();
            }
        }
    }

    fn cursor(&self) -> String {
        match self.canvas.style().get_property_value("cursor") {
            Ok(cursor) => cursor,
            Err(err) => {
                log::warn!("reading canvas cursor failed: {}", js_error_message(&err));
                String::new()
            }
        }
    }

    fn set_cursor(&self, cursor: &str) {
        if let Err(err) = self.canvas.style().set_property("cursor", cursor) {
            log::warn!("setting canvas cursor failed: {}", js_error_message(&err));
        }
    }
}

/// Bootstrap: bind the canvas, construct the controller, start rendering.
///
/// `config` is an optional JSON object (see [`HostConfig`]). Rejects if the
/// config is invalid, the canvas is missing, or the controller factory fails.
#[wasm_bindgen]
pub async fn start(config: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = match HostConfig::from_json(config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            init_logging(log::Level::Info);
            return Err(startup_failure(&HostError::from(err)));
        }
    };
    init_logging(config.level().unwrap_or(log::Level::Info));
    boot(config).await.map_err(|err| startup_failure(&err))
}

fn init_logging(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {err}");
    }
}

fn startup_failure(err: &HostError) -> JsValue {
    log::error!("startup failed: {err}");
    js_sys::Error::new(&err.to_string()).into()
}

async fn boot(config: HostConfig) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    let element = document
        .get_element_by_id(&config.canvas_id)
        .ok_or_else(|| HostError::CanvasNotFound(config.canvas_id.clone()))?;
    let canvas = element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| HostError::NotACanvas(config.canvas_id.clone()))?;

    let (width, height) = client_size(&canvas);
    let host = Rc::new(Host::new(window, canvas, RouterCore::from_config(&config)));
    host.install()?;

    log::info!("constructing controller (quality {}, {width}x{height})", config.quality);
    match construct(config.quality, width, height).await {
        Ok(controller) => {
            log::info!("controller ready on #{}", config.canvas_id);
            let actions = host.core.borrow_mut().on_ready(controller);
            host.apply(actions);
            Ok(())
        }
        Err(err) => {
            host.core.borrow_mut().on_init_failed(err.to_string());
            Err(err.into())
        }
    }
}
