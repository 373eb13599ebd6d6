use std::time::Duration;

use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use js_sys::Reflect;
use log::error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::dom::{self, Shell};
use super::{AppRef, dispatch};
use crate::motion::ScrollRegion;
use crate::names::NameSequence;
use crate::runtime::{FrameId, PlaybackState, WallCommand, WallHost};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub struct DomHost {
    app: AppRef,
    window: Window,
    document: Document,
    shell: Shell,
    saved_body_overflow: Option<String>,
}

impl DomHost {
    pub fn new(
        app: AppRef,
        window: Window,
        document: Document,
        shell: Shell,
    ) -> Self {
        Self {
            app,
            window,
            document,
            shell,
            saved_body_overflow: None,
        }
    }

    fn report(&self, action: &str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            error!("Failed to {}: {:?}", action, err);
        }
    }
}

impl ScrollRegion for DomHost {
    fn scroll_height(&self) -> f64 {
        self.shell.scroll.scroll_height() as f64
    }

    // Set through Reflect so fractional offsets reach the element as-is.
    fn set_scroll_top(&mut self, top: f64) {
        let _ = Reflect::set(
            &self.shell.scroll,
            &JsValue::from_str("scrollTop"),
            &JsValue::from_f64(top),
        );
    }
}

impl WallHost for DomHost {
    type Frame = AnimationFrame;
    type Timer = Timeout;

    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .is_some_and(|query| query.matches())
    }

    fn request_frame(&mut self, id: FrameId) -> AnimationFrame {
        let app = self.app.clone();
        request_animation_frame(move |_timestamp| {
            dispatch(&app, WallCommand::Tick(id));
        })
    }

    fn start_timer(&mut self, delay: Duration) -> Timeout {
        let app = self.app.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            dispatch(&app, WallCommand::Settle);
        })
    }

    fn render_names(&mut self, names: &NameSequence) {
        let result = dom::render_names(&self.document, &self.shell.scroll, names);
        self.report("render names", result);
    }

    fn render_playback(&mut self, state: PlaybackState) {
        let result = dom::render_playback(&self.shell, state);
        self.report("render playback controls", result);
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        let result = dom::set_overlay_open(&self.shell, visible);
        self.report("toggle overlay", result);
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();

        let result = if locked {
            if self.saved_body_overflow.is_some() {
                return;
            }
            let previous = style.get_property_value("overflow").unwrap_or_default();
            self.saved_body_overflow = Some(previous);
            style.set_property("overflow", "hidden")
        } else {
            let Some(previous) = self.saved_body_overflow.take() else {
                return;
            };
            if previous.is_empty() {
                style.remove_property("overflow").map(|_| ())
            } else {
                style.set_property("overflow", &previous)
            }
        };

        self.report("update page scroll lock", result);
    }
}
