use std::cell::Cell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Window};

use super::dom::Shell;
use super::{AppRef, dispatch, is_visible};
use crate::runtime::{KeyAction, KeyFocus, WallCommand, WallKey, key_action};

const TEXT_ENTRY_TARGETS: &str =
    "input, textarea, select, [contenteditable]:not([contenteditable='false'])";

/// Listeners live as long as the returned guards.
pub fn install(app: &AppRef, window: &Window, shell: &Shell) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    listeners.push(on_click(app, &shell.scroll, WallCommand::Toggle));
    listeners.push(on_click(app, &shell.toggle, WallCommand::Toggle));

    if let Some(close) = shell.close.as_ref() {
        listeners.push(on_click(app, close, WallCommand::Close));
    }

    if let Some(launcher) = shell.launcher.as_ref() {
        listeners.push(on_click(app, launcher, WallCommand::Open));
    }

    // Set when a Space keydown was consumed, so the matching keyup cannot
    // activate whatever button holds focus.
    let space_consumed = Rc::new(Cell::new(false));

    let target = app.clone();
    let consumed = space_consumed.clone();
    listeners.push(EventListener::new_with_options(
        window,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(key) = wall_key(event) else {
                return;
            };

            let action = key_action(
                key,
                event.repeat(),
                key_focus(event),
                is_visible(&target),
            );

            let handled = match action {
                KeyAction::Ignore => false,
                KeyAction::Suppress => true,
                KeyAction::Dispatch(key) => {
                    dispatch(&target, WallCommand::Key(key))
                }
            };

            if handled {
                event.prevent_default();
                if key == WallKey::Space {
                    consumed.set(true);
                }
            }
        },
    ));

    listeners.push(EventListener::new_with_options(
        window,
        "keyup",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if WallKey::from_key(&event.key()) == Some(WallKey::Space)
                && space_consumed.replace(false)
            {
                event.prevent_default();
            }
        },
    ));

    listeners
}

fn wall_key(event: &KeyboardEvent) -> Option<WallKey> {
    if event.default_prevented()
        || event.alt_key()
        || event.ctrl_key()
        || event.meta_key()
    {
        return None;
    }
    WallKey::from_key(&event.key())
}

fn key_focus(event: &KeyboardEvent) -> KeyFocus {
    let typing = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(TEXT_ENTRY_TARGETS).ok().flatten())
        .is_some();

    if typing {
        KeyFocus::TextEntry
    } else {
        KeyFocus::Elsewhere
    }
}

fn on_click(
    app: &AppRef,
    element: &Element,
    command: WallCommand,
) -> EventListener {
    let target = app.clone();
    EventListener::new(element, "click", move |event: &Event| {
        // Host page handlers never see wall clicks.
        event.stop_propagation();
        dispatch(&target, command.clone());
    })
}
