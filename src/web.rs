//! Browser host: mounts a canvas, forwards pointer events, and drives
//! [`DemoApp::frame`] from `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent, Window};

use crate::error::KnotpickError;
use crate::input::{InputEvent, PointerPosition, Viewport};
use crate::options::Options;
use crate::DemoApp;

/// Id of the element the canvas is mounted into.
pub const CONTAINER_ID: &str = "drawing";

type FrameCallback = Closure<dyn FnMut(f64)>;

fn js_error(e: &JsValue) -> KnotpickError {
    KnotpickError::Web(format!("{e:?}"))
}

/// Wasm module entry point: installs logging and starts with default
/// options.
#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    start(Options::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Mount into `#drawing` and start the frame loop.
///
/// A page without the container is not an error: a warning is logged and
/// nothing is created.
pub fn start(options: Options) -> Result<(), KnotpickError> {
    let window = web_sys::window()
        .ok_or_else(|| KnotpickError::Web("no global window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| KnotpickError::Web("window has no document".to_owned()))?;

    let (canvas, viewport) = match mount_canvas(&window, &document) {
        Ok(mounted) => mounted,
        Err(KnotpickError::MissingContainer(id)) => {
            log::warn!("Your HTML page needs a DIV with id='{id}'");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let app = Rc::new(RefCell::new(DemoApp::new(options, viewport)));

    install_pointer_listeners(&canvas, &app)?;
    install_resize_listener(&window, canvas, &app)?;
    start_frame_loop(&window, app)?;
    log::info!("mounted into #{CONTAINER_ID}");
    Ok(())
}

/// Create a canvas filling the container, with a device-pixel backing
/// store, and return it with its viewport.
fn mount_canvas(
    window: &Window,
    document: &Document,
) -> Result<(HtmlCanvasElement, Viewport), KnotpickError> {
    let container = document.get_element_by_id(CONTAINER_ID).ok_or_else(
        || KnotpickError::MissingContainer(CONTAINER_ID.to_owned()),
    )?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| js_error(&e))?
        .dyn_into()
        .map_err(|e| js_error(&e))?;

    let viewport = fit_canvas(window, &canvas, &container);
    let _ = container.append_child(&canvas).map_err(|e| js_error(&e))?;
    Ok((canvas, viewport))
}

/// Size the canvas backing store to the container in device pixels and
/// return the matching viewport.
fn fit_canvas(
    window: &Window,
    canvas: &HtmlCanvasElement,
    container: &Element,
) -> Viewport {
    let ratio = window.device_pixel_ratio();
    canvas.set_width((f64::from(container.client_width()) * ratio) as u32);
    canvas.set_height((f64::from(container.client_height()) * ratio) as u32);
    Viewport::new(canvas.width() as f32, canvas.height() as f32, ratio as f32)
}

/// Refit the canvas and camera whenever the window changes size or
/// pixel density.
fn install_resize_listener(
    window: &Window,
    canvas: HtmlCanvasElement,
    app: &Rc<RefCell<DemoApp>>,
) -> Result<(), KnotpickError> {
    let app = Rc::clone(app);
    let listener = Closure::<dyn FnMut()>::new(move || {
        let (Some(window), Some(container)) =
            (web_sys::window(), canvas.parent_element())
        else {
            return;
        };
        let viewport = fit_canvas(&window, &canvas, &container);
        log::debug!(
            "resized to {}x{} @{}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
        app.borrow_mut().resize(
            viewport.width,
            viewport.height,
            viewport.pixel_ratio,
        );
    });
    window
        .add_event_listener_with_callback(
            "resize",
            listener.as_ref().unchecked_ref(),
        )
        .map_err(|e| js_error(&e))?;
    listener.forget();
    Ok(())
}

fn offset(ev: &MouseEvent) -> PointerPosition {
    PointerPosition::new(ev.offset_x() as f32, ev.offset_y() as f32)
}

fn install_pointer_listeners(
    canvas: &HtmlCanvasElement,
    app: &Rc<RefCell<DemoApp>>,
) -> Result<(), KnotpickError> {
    let handlers: [(&str, fn(&MouseEvent) -> InputEvent); 5] = [
        ("mousedown", |ev| InputEvent::PointerDown(offset(ev))),
        ("mouseup", |ev| InputEvent::PointerUp(offset(ev))),
        ("mousemove", |ev| InputEvent::PointerMove(offset(ev))),
        ("mouseout", |_| InputEvent::PointerOut),
        ("mouseleave", |_| InputEvent::PointerLeave),
    ];

    for (name, to_event) in handlers {
        let app = Rc::clone(app);
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(
            move |ev: MouseEvent| {
                app.borrow_mut().handle_event(to_event(&ev));
            },
        );
        canvas
            .add_event_listener_with_callback(
                name,
                listener.as_ref().unchecked_ref(),
            )
            .map_err(|e| js_error(&e))?;
        // Listeners live as long as the page
        listener.forget();
    }
    Ok(())
}

fn request_frame(
    window: &Window,
    callback: &FrameCallback,
) -> Result<i32, KnotpickError> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| js_error(&e))
}

fn start_frame_loop(
    window: &Window,
    app: Rc<RefCell<DemoApp>>,
) -> Result<(), KnotpickError> {
    // The callback re-schedules itself, so it has to be reachable from
    // inside its own body.
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let inner = Rc::clone(&slot);

    *slot.borrow_mut() = Some(Closure::new(move |time: f64| {
        let _ = app.borrow_mut().frame(time);

        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = inner.borrow().as_ref() {
            if let Err(e) = request_frame(&window, callback) {
                log::error!("frame loop stopped: {e}");
            }
        }
    }));

    let first = slot.borrow();
    let Some(callback) = first.as_ref() else {
        return Ok(());
    };
    request_frame(window, callback).map(|_| ())
}
