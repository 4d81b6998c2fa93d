//! Hero canvas: particle field wiring and the animation loop.
//!
//! The field is shared between the frame callback and the pointer and
//! resize listeners through `Rc<RefCell<_>>`; everything runs on the page's
//! single event loop, so borrows never overlap.

use crate::dom::{self, Listener};
use crate::render2d;
use sicosa_core::{ParticleField, PointerState, SiteConfig, Size};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A self-rescheduling `requestAnimationFrame` loop with an explicit stop.
pub struct AnimationLoop {
    window: Window,
    running: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    /// Start calling `tick` once per display frame.
    pub fn start(window: &Window, mut tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let running = Rc::new(Cell::new(true));
        let frame_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        // The closure reschedules itself through `next`; `stop()` breaks the
        // cycle by taking the closure out.
        let next = callback.clone();
        let (win, run, id) = (window.clone(), running.clone(), frame_id.clone());
        *callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            id.set(None);
            if !run.get() {
                return;
            }
            tick();
            if let Some(cb) = next.borrow().as_ref() {
                match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(handle) => id.set(Some(handle)),
                    Err(e) => {
                        log::warn!("hero: requestAnimationFrame failed, stopping: {e:?}");
                        run.set(false);
                    }
                }
            }
        }));

        let first = match callback.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref())?,
            None => return Err(JsValue::from_str("animation callback missing")),
        };
        frame_id.set(Some(first));

        Ok(Self {
            window: window.clone(),
            running,
            frame_id,
            callback,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the callback. Idempotent.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The mounted hero canvas.
pub struct HeroCanvas {
    animation: AnimationLoop,
    field: Rc<RefCell<ParticleField>>,
    _listeners: Vec<Listener>,
}

impl HeroCanvas {
    pub fn stop(&self) {
        self.animation.stop();
        log::debug!("hero: stopped after {} frames", self.field.borrow().frame());
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }
}

pub fn init(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<HeroCanvas>, JsValue> {
    let selector = &config.selectors.hero_canvas;
    let Some(canvas) = dom::find(document, selector)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::debug!("hero: no canvas at `{selector}`, skipping");
        return Ok(None);
    };
    let Some(container) = canvas
        .parent_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("hero: canvas has no container, skipping");
        return Ok(None);
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        log::debug!("hero: 2d context unavailable, skipping");
        return Ok(None);
    };

    let size = fit_to_container(&canvas, &container);
    let mut rand = js_sys::Math::random;
    let field = Rc::new(RefCell::new(ParticleField::new(
        config.particles.clone(),
        size,
        &mut rand,
    )));

    let mut listeners = Vec::with_capacity(3);

    listeners.push({
        let (field, canvas, container) = (field.clone(), canvas.clone(), container.clone());
        Listener::new(window, "resize", move |_| {
            let size = fit_to_container(&canvas, &container);
            field.borrow_mut().resize(size);
        })?
    });

    listeners.push({
        let (field, canvas) = (field.clone(), canvas.clone());
        Listener::new(&container, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = canvas.get_bounding_client_rect();
            field.borrow_mut().set_pointer(PointerState::from_client(
                event.client_x() as f64,
                event.client_y() as f64,
                rect.left(),
                rect.top(),
            ));
        })?
    });

    listeners.push({
        let field = field.clone();
        Listener::new(&container, "mouseleave", move |_| {
            field.borrow_mut().clear_pointer();
        })?
    });

    let animation = {
        let field = field.clone();
        AnimationLoop::start(window, move || {
            render2d::draw_frame(&ctx, &mut field.borrow_mut());
        })?
    };

    log::info!(
        "hero: animating {} particles on {}x{}",
        field.borrow().particles().len(),
        size.width,
        size.height
    );
    Ok(Some(HeroCanvas {
        animation,
        field,
        _listeners: listeners,
    }))
}

/// Match the canvas's pixel size to its container's layout size.
fn fit_to_container(canvas: &HtmlCanvasElement, container: &HtmlElement) -> Size {
    let width = container.offset_width().max(0) as u32;
    let height = container.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    Size::new(width as f64, height as f64)
}
