use super::frame_loop::FrameId;
use super::loader::LoadTicket;
use crate::names::NameSequence;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WallKey {
    Space,
    Escape,
}

impl WallKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" => Some(Self::Space),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Where keyboard focus sat when a key went down.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyFocus {
    /// Anything that does not take typed text, the wall's own buttons
    /// included.
    Elsewhere,
    /// Inputs, textareas, selects and contenteditable elements.
    TextEntry,
}

/// What the shell does with a keydown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyAction {
    /// Leave the event to the browser.
    Ignore,
    /// Swallow the key without touching the wall.
    Suppress,
    /// Send to the runtime and suppress the default if it was handled.
    Dispatch(WallKey),
}

/// Decides how a keydown reaches the wall.
///
/// Space is a global toggle except while typing. A held Space never
/// toggles again but still keeps the page from scrolling while the wall
/// is visible. Escape always goes to the runtime, which ignores it unless
/// an overlay is open.
pub fn key_action(
    key: WallKey,
    repeat: bool,
    focus: KeyFocus,
    visible: bool,
) -> KeyAction {
    match key {
        WallKey::Escape => KeyAction::Dispatch(WallKey::Escape),
        WallKey::Space if focus == KeyFocus::TextEntry => KeyAction::Ignore,
        WallKey::Space if repeat && visible => KeyAction::Suppress,
        WallKey::Space if repeat => KeyAction::Ignore,
        WallKey::Space => KeyAction::Dispatch(WallKey::Space),
    }
}

/// Everything that can change the wall, funneled through
/// [`WallRuntime::on_command`](super::app::WallRuntime::on_command).
#[derive(Clone, Debug, PartialEq)]
pub enum WallCommand {
    /// Click on the name region or the play/pause button.
    Toggle,
    Key(WallKey),
    Open,
    Close,

    /// The close transition finished; re-derive playback.
    Settle,

    Tick(FrameId),
    NamesLoaded(LoadTicket, NameSequence),
    Unmount,
}
