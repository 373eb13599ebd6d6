use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the overlay takes to fade out. Playback is re-derived only
/// after this elapses; the shell writes the same value into the stylesheet.
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

impl PlaybackState {
    /// Reduced-motion users start paused.
    pub fn from_reduced_motion(prefers_reduced_motion: bool) -> Self {
        if prefers_reduced_motion {
            Self::Paused
        } else {
            Self::Playing
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }

    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WallVariant {
    /// Inline half-screen panel, visible for as long as it is mounted.
    #[default]
    Panel,
    /// Full-screen modal that is opened and closed on demand.
    Overlay,
}

/// Playing/paused plus whether the wall is currently on screen.
#[derive(Clone, Debug)]
pub struct Playback {
    variant: WallVariant,
    state: PlaybackState,
    visible: bool,
}

impl Playback {
    pub fn mount(variant: WallVariant, prefers_reduced_motion: bool) -> Self {
        Self {
            variant,
            state: PlaybackState::from_reduced_motion(prefers_reduced_motion),
            visible: variant == WallVariant::Panel,
        }
    }

    pub fn variant(&self) -> WallVariant {
        self.variant
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Click or spacebar. Ignored while hidden.
    pub fn toggle(&mut self) -> Option<PlaybackState> {
        if !self.visible {
            return None;
        }
        self.state = self.state.toggled();
        Some(self.state)
    }

    /// Returns false when there is nothing to open (panel, or already open).
    pub fn open(&mut self, prefers_reduced_motion: bool) -> bool {
        if self.variant != WallVariant::Overlay || self.visible {
            return false;
        }
        self.visible = true;
        self.settle(prefers_reduced_motion);
        true
    }

    /// Hides the overlay immediately. The caller settles playback once the
    /// close transition has finished.
    pub fn close(&mut self) -> bool {
        if self.variant != WallVariant::Overlay || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Re-derives playing/paused from a fresh reduced-motion reading.
    pub fn settle(&mut self, prefers_reduced_motion: bool) {
        self.state = PlaybackState::from_reduced_motion(prefers_reduced_motion);
    }

    pub fn should_animate(&self) -> bool {
        self.visible && self.state.is_playing()
    }
}
