//! DOM scoreboard presentation.
//!
//! The simulation never touches the DOM; this layer republishes the
//! scoreboard whenever its revision moves.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::clock::TickSink;
use crate::sim::Scoreboard;

const CAUGHT_ID: &str = "catched";
const MISSED_ID: &str = "lost";
const HEADER_CLASS: &str = "header";
const GAME_OVER_CLASS: &str = "game-over";

pub struct ScoreHud {
    score: Rc<RefCell<Scoreboard>>,
    seen_revision: u64,
    caught_el: Option<Element>,
    missed_el: Option<Element>,
    header_el: Option<Element>,
}

impl ScoreHud {
    /// Bind to the header counters, creating the whole header region when
    /// the host page does not provide one.
    pub fn attach(doc: &Document, score: Rc<RefCell<Scoreboard>>) -> Result<Self, JsValue> {
        ensure_header(doc)?;
        let caught_el = doc.query_selector(&format!("#{CAUGHT_ID} span")).ok().flatten();
        let missed_el = doc.query_selector(&format!("#{MISSED_ID} span")).ok().flatten();
        let header_el = doc.query_selector(&format!(".{HEADER_CLASS}")).ok().flatten();
        if caught_el.is_none() || missed_el.is_none() {
            log::warn!("score counters not found; HUD output disabled");
        }
        let mut hud = Self {
            score,
            seen_revision: 0,
            caught_el,
            missed_el,
            header_el,
        };
        hud.publish();
        Ok(hud)
    }

    fn publish(&mut self) {
        let score = self.score.borrow();
        self.seen_revision = score.revision();
        if let Some(el) = &self.caught_el {
            el.set_text_content(Some(&score.caught().to_string()));
        }
        if let Some(el) = &self.missed_el {
            el.set_text_content(Some(&score.missed().to_string()));
        }
        if score.game_over() {
            if let Some(el) = &self.header_el {
                el.class_list().add_1(GAME_OVER_CLASS).ok();
            }
        }
    }
}

impl TickSink for ScoreHud {
    fn tick(&mut self, _now_ms: f64) {
        if self.score.borrow().revision() == self.seen_revision {
            return;
        }
        self.publish();
    }
}

/// Host pages usually ship their own `.header` markup; build a minimal one
/// only when it is absent entirely.
fn ensure_header(doc: &Document) -> Result<(), JsValue> {
    if doc.query_selector(&format!(".{HEADER_CLASS}"))?.is_some() {
        return Ok(());
    }
    let Some(body) = doc.body() else {
        return Ok(());
    };
    let header = doc.create_element("div")?;
    header.set_class_name(HEADER_CLASS);
    header
        .set_attribute(
            "style",
            "position:fixed; top:10px; left:12px; font-family:monospace; font-size:15px; \
             padding:4px 8px; background:rgba(0,0,0,0.42); border-radius:6px; color:#ffd166; \
             z-index:45;",
        )
        .ok();
    let caught = doc.create_element("div")?;
    caught.set_id(CAUGHT_ID);
    caught.set_inner_html("Catched: <span>0</span>");
    let missed = doc.create_element("div")?;
    missed.set_id(MISSED_ID);
    missed.set_inner_html("Lost: <span>0</span>");
    header.append_child(&caught)?;
    header.append_child(&missed)?;
    body.append_child(&header)?;
    Ok(())
}
