//! Frame loop: an explicit tick-subscription interface over
//! `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

/// Receives one callback per displayed frame with the rAF timestamp in ms.
pub trait TickSink {
    fn tick(&mut self, now_ms: f64);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Invokes its subscribers once per display refresh, in registration order,
/// for the page's lifetime. No cancellation is exposed.
pub struct Clock {
    sinks: Vec<Rc<RefCell<dyn TickSink>>>,
}

impl Clock {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn subscribe(&mut self, sink: Rc<RefCell<dyn TickSink>>) {
        self.sinks.push(sink);
    }

    /// Consume the clock and enter the frame loop; the closure keeps itself
    /// alive by rescheduling every frame.
    pub fn start(self) {
        let sinks = self.sinks;
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            for sink in &sinks {
                sink.borrow_mut().tick(now_ms);
            }
            if let Some(w) = window() {
                let _ =
                    w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut(f64)>));
        if let Some(w) = window() {
            let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }
}
