//! Canvas surface: backing-buffer sizing, device pixel ratio, per-tick clear.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

use super::clock::TickSink;
use crate::consts;
use crate::sim::Viewport;

pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
}

impl Surface {
    /// Reuse the `#canvas` element or create a fullscreen one, size it to
    /// the viewport, and install the window resize listener.
    pub fn attach(doc: &Document) -> Result<Rc<RefCell<Surface>>, JsValue> {
        let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(consts::CANVAS_ID) {
            el.dyn_into()?
        } else {
            let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
            c.set_id(consts::CANVAS_ID);
            c.set_attribute("style", "position:fixed; left:0; top:0; z-index:1;")
                .ok();
            doc.body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&c)?;
            c
        };
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let mut surface = Surface {
            canvas,
            ctx,
            dpr: 1.0,
        };
        surface.resize();
        let surface = Rc::new(RefCell::new(surface));

        {
            let on_resize = surface.clone();
            let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
                on_resize.borrow_mut().resize();
            }) as Box<dyn FnMut(_)>);
            window()
                .ok_or_else(|| JsValue::from_str("no window"))?
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(surface)
    }

    /// Recompute dimensions from the current viewport: the CSS size stays in
    /// CSS pixels while the backing buffer is scaled by the device pixel
    /// ratio.
    pub fn resize(&mut self) {
        let Some(win) = window() else { return };
        let css_w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let css_h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        self.dpr = win.device_pixel_ratio();
        let style = self.canvas.style();
        style.set_property("width", &format!("{css_w}px")).ok();
        style.set_property("height", &format!("{css_h}px")).ok();
        self.canvas.set_width((css_w * self.dpr) as u32);
        self.canvas.set_height((css_h * self.dpr) as u32);
    }

    /// Erase the whole buffer. Anything drawn before the clear within a tick
    /// is lost, so the surface must be subscribed ahead of every drawing
    /// component.
    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    pub fn ctx(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.canvas.width() as f64,
            self.canvas.height() as f64,
            self.dpr,
        )
    }
}

impl TickSink for Surface {
    fn tick(&mut self, _now_ms: f64) {
        self.clear();
    }
}
