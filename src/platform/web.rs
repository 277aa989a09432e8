//! Browser binding (WASM only)
//!
//! Exposes [`NeuroPlay`] to the embedding page. One persistent animation-frame
//! closure drives the session; it is scheduled at most once at a time and the
//! pending frame is cancelled on stop or when the handle is freed.
//!
//! JS callbacks never run while the session is borrowed. Score events are
//! queued by the controller and dispatched afterwards, so a callback may call
//! `stop()` or `start()` directly.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, PointerEvent};

use super::PendingFrame;
use crate::EngineError;
use crate::engine::{FrameOutcome, Game, ScoreEvent, SessionController, SessionSummary};
use crate::history::{SessionHistory, SessionRecord};
use crate::render::CanvasSurface;
use crate::settings::{SessionSettings, VariantKind};

type Controller = SessionController<Game, Vec<ScoreEvent>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) keeps the existing logger
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("NeuroWeave Play loaded");
}

fn to_js(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Same timeline as animation-frame and event timestamps
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

struct Shared {
    controller: Controller,
    surface: CanvasSurface,
}

impl Shared {
    fn take_events(&mut self) -> Vec<ScoreEvent> {
        std::mem::take(self.controller.sink_mut())
    }
}

struct Callbacks {
    on_score_update: js_sys::Function,
    on_game_over: js_sys::Function,
}

impl Callbacks {
    fn dispatch(&self, events: Vec<ScoreEvent>) {
        for event in events {
            let (callback, value) = match event {
                ScoreEvent::ScoreUpdated(score) => (&self.on_score_update, score),
                ScoreEvent::GameOver(score) => (&self.on_game_over, score),
            };
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_f64(value as f64)) {
                log::error!("Score callback threw: {:?}", e);
            }
        }
    }
}

fn record_history(summary: &SessionSummary) {
    let mut history = SessionHistory::load();
    history.push(SessionRecord::from_summary(summary, js_sys::Date::now()));
    history.save();
}

/// Request the next animation frame unless one is pending or the session is idle
fn schedule_frame(shared: &RefCell<Shared>, frame_cb: &FrameCallback, pending: &PendingFrame) {
    // A busy session is still running; the next frame will check again
    let active = shared
        .try_borrow()
        .map_or(true, |s| s.controller.is_active());
    if !pending.needs_request(active) {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let guard = frame_cb.borrow();
    let Some(closure) = guard.as_ref() else {
        return;
    };
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => pending.requested(id),
        Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
    }
}

fn cancel_frame(pending: &PendingFrame) {
    if let Some(id) = pending.take() {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

fn frame_closure(
    shared: Weak<RefCell<Shared>>,
    frame_cb: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    pending: Rc<PendingFrame>,
    callbacks: Rc<Callbacks>,
) -> Closure<dyn FnMut(f64)> {
    Closure::<dyn FnMut(f64)>::new(move |time: f64| {
        pending.fired();
        let (Some(shared), Some(frame_cb)) = (shared.upgrade(), frame_cb.upgrade()) else {
            return;
        };
        let (outcome, events) = match shared.try_borrow_mut() {
            Ok(mut guard) => {
                let s = &mut *guard;
                let outcome = s.controller.frame(&mut s.surface, time);
                (outcome, s.take_events())
            }
            Err(_) => {
                log::warn!("Frame skipped: session busy");
                schedule_frame(&shared, &frame_cb, &pending);
                return;
            }
        };
        callbacks.dispatch(events);

        match outcome {
            FrameOutcome::Continue => schedule_frame(&shared, &frame_cb, &pending),
            FrameOutcome::Ended(summary) => record_history(&summary),
            FrameOutcome::Inactive => {}
        }
    })
}

fn pointer_closure(
    shared: Weak<RefCell<Shared>>,
    callbacks: Rc<Callbacks>,
) -> Closure<dyn FnMut(PointerEvent)> {
    Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        let events = {
            let Ok(mut guard) = shared.try_borrow_mut() else {
                return;
            };
            let s = &mut *guard;
            let point = s
                .surface
                .to_surface_point(event.offset_x() as f32, event.offset_y() as f32);
            let outcome = s.controller.pointer(point, event.time_stamp());
            log::trace!("Pointer at {:?}: {:?}", point, outcome);
            s.take_events()
        };
        callbacks.dispatch(events);
    })
}

/// A mini-game bound to a canvas element
#[wasm_bindgen]
pub struct NeuroPlay {
    shared: Rc<RefCell<Shared>>,
    callbacks: Rc<Callbacks>,
    pending: Rc<PendingFrame>,
    frame_cb: FrameCallback,
    pointer_cb: Closure<dyn FnMut(PointerEvent)>,
    canvas: HtmlCanvasElement,
}

#[wasm_bindgen]
impl NeuroPlay {
    /// `variant` is `bubble-pop` / `target-grid` (or `babyleap` / `milestones`).
    /// `config_json` follows `SessionSettings`; omitted fields take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        variant: &str,
        config_json: Option<String>,
        on_score_update: js_sys::Function,
        on_game_over: js_sys::Function,
    ) -> Result<NeuroPlay, JsValue> {
        let kind = VariantKind::from_str(variant)
            .ok_or_else(|| to_js(EngineError::UnknownVariant(variant.to_string())))?;
        let settings = match config_json.as_deref() {
            Some(json) => SessionSettings::from_json(json).map_err(to_js)?,
            None => SessionSettings::default(),
        };

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| to_js(EngineError::SurfaceUnavailable))?
            .dyn_into()
            .map_err(|_| to_js(EngineError::SurfaceUnavailable))?;
        let surface = CanvasSurface::new(canvas.clone()).map_err(to_js)?;

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let controller = SessionController::new(
            Game::new(kind, &settings),
            Vec::new(),
            settings.duration_ms,
            seed,
        );

        let shared = Rc::new(RefCell::new(Shared {
            controller,
            surface,
        }));
        let callbacks = Rc::new(Callbacks {
            on_score_update,
            on_game_over,
        });

        let pending = Rc::new(PendingFrame::new());
        let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
        *frame_cb.borrow_mut() = Some(frame_closure(
            Rc::downgrade(&shared),
            Rc::downgrade(&frame_cb),
            pending.clone(),
            callbacks.clone(),
        ));

        let pointer_cb = pointer_closure(Rc::downgrade(&shared), callbacks.clone());
        canvas.add_event_listener_with_callback(
            "pointerdown",
            pointer_cb.as_ref().unchecked_ref(),
        )?;

        log::info!("NeuroPlay ready: {} (seed {})", kind.as_str(), seed);

        Ok(NeuroPlay {
            shared,
            callbacks,
            pending,
            frame_cb,
            pointer_cb,
            canvas,
        })
    }

    /// Begin a session. Fails if the canvas cannot be drawn to.
    pub fn start(&self) -> Result<(), JsValue> {
        {
            let mut guard = self.shared.borrow_mut();
            let s = &mut *guard;
            s.controller.start(&s.surface, now_ms()).map_err(to_js)?;
        }
        schedule_frame(&self.shared, &self.frame_cb, &self.pending);
        Ok(())
    }

    /// End the session. Returns the summary JSON, or `undefined` if idle.
    pub fn stop(&self) -> Option<String> {
        cancel_frame(&self.pending);
        let (summary, events) = {
            let mut s = self.shared.borrow_mut();
            let summary = s.controller.stop(now_ms());
            (summary, s.take_events())
        };
        self.callbacks.dispatch(events);

        let summary = summary?;
        record_history(&summary);
        match summary.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("Failed to serialize summary: {}", e);
                None
            }
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.shared.borrow().controller.is_active()
    }

    pub fn score(&self) -> f64 {
        self.shared.borrow().controller.score() as f64
    }

    pub fn fps(&self) -> u32 {
        self.shared.borrow().controller.clock().fps()
    }

    /// Stored session history as JSON
    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json() -> Result<String, JsValue> {
        SessionHistory::load().to_json().map_err(to_js)
    }
}

impl Drop for NeuroPlay {
    fn drop(&mut self) {
        // Unmount: no frame may fire after this
        cancel_frame(&self.pending);
        let events = match self.shared.try_borrow_mut() {
            Ok(mut s) => {
                if let Some(summary) = s.controller.stop(now_ms()) {
                    record_history(&summary);
                }
                s.take_events()
            }
            Err(_) => Vec::new(),
        };
        self.callbacks.dispatch(events);

        let _ = self.canvas.remove_event_listener_with_callback(
            "pointerdown",
            self.pointer_cb.as_ref().unchecked_ref(),
        );
        log::info!("NeuroPlay released");
    }
}
