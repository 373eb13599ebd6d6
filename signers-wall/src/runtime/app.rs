use std::time::Duration;

use log::{debug, info, trace};

use super::config::WallConfig;
use super::events::{WallCommand, WallKey};
use super::frame_loop::{FrameId, FrameLoop};
use super::loader::LoadTicket;
use super::playback::{CLOSE_TRANSITION, Playback, PlaybackState, WallVariant};
use crate::motion::{ScrollEngine, ScrollRegion};
use crate::names::NameSequence;

/// The environment a wall runs in: the DOM in the browser, a fake in tests.
///
/// Frame and timer handles are expected to cancel their callback when
/// dropped. Callbacks feed back into [`WallRuntime::on_command`] as
/// [`WallCommand::Tick`] and [`WallCommand::Settle`].
pub trait WallHost: ScrollRegion {
    type Frame;
    type Timer;

    /// Read on demand; the runtime never subscribes to changes.
    fn prefers_reduced_motion(&self) -> bool;

    fn request_frame(&mut self, id: FrameId) -> Self::Frame;
    fn start_timer(&mut self, delay: Duration) -> Self::Timer;

    fn render_names(&mut self, names: &NameSequence);
    fn render_playback(&mut self, state: PlaybackState);
    fn set_overlay_visible(&mut self, visible: bool);
    fn set_page_scroll_locked(&mut self, locked: bool);
}

/// Owns all mutable wall state for one mount. Every change goes through
/// [`WallRuntime::on_command`].
pub struct WallRuntime<H: WallHost> {
    config: WallConfig,
    names: NameSequence,
    playback: Playback,
    engine: ScrollEngine,
    frames: FrameLoop<H::Frame>,
    settle_timer: Option<H::Timer>,
    load_generation: u64,
    mounted: bool,
}

impl<H: WallHost> WallRuntime<H> {
    pub fn mount(config: WallConfig, host: &mut H) -> Self {
        let config = config.normalized();
        let playback =
            Playback::mount(config.variant, host.prefers_reduced_motion());

        info!(
            "Mounting {:?} wall into '{}' ({:?})",
            config.variant,
            config.target_selector,
            playback.state()
        );

        host.render_playback(playback.state());

        Self {
            engine: ScrollEngine::new(config.scroll_step),
            config,
            names: NameSequence::empty(),
            playback,
            frames: FrameLoop::default(),
            settle_timer: None,
            load_generation: 0,
            mounted: true,
        }
    }

    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    pub fn names(&self) -> &NameSequence {
        &self.names
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn is_visible(&self) -> bool {
        self.playback.is_visible()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn cursor(&self) -> f64 {
        self.engine.cursor()
    }

    pub fn frame_scheduled(&self) -> bool {
        self.frames.is_scheduled()
    }

    pub fn settle_pending(&self) -> bool {
        self.settle_timer.is_some()
    }

    /// Starts a new load, invalidating any load still in flight. The
    /// returned ticket goes back in [`WallCommand::NamesLoaded`].
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket(self.load_generation)
    }

    /// Points the wall at a new source. The caller starts the fetch with
    /// the returned ticket.
    pub fn set_csv_url(&mut self, url: &str) -> LoadTicket {
        self.config.csv_url = url.to_string();
        self.begin_load()
    }

    /// Returns true when the command changed something. For
    /// [`WallCommand::Key`] that means the key's default action should be
    /// suppressed.
    pub fn on_command(&mut self, command: WallCommand, host: &mut H) -> bool {
        if !self.mounted {
            return false;
        }

        match command {
            WallCommand::Toggle => self.toggle(host),
            WallCommand::Key(WallKey::Space) => self.toggle(host),
            WallCommand::Key(WallKey::Escape) => self.close(host),
            WallCommand::Open => {
                if !self.playback.open(host.prefers_reduced_motion()) {
                    return false;
                }
                // Reopening during the fade-out supersedes the pending settle.
                self.settle_timer = None;
                host.set_overlay_visible(true);
                host.set_page_scroll_locked(true);
                host.render_playback(self.playback.state());
                self.sync_frames(host);
                true
            }
            WallCommand::Close => self.close(host),
            WallCommand::Settle => {
                if self.settle_timer.take().is_none() {
                    return false;
                }
                self.playback.settle(host.prefers_reduced_motion());
                debug!("Close settled; playback {:?}", self.playback.state());
                host.render_playback(self.playback.state());
                self.sync_frames(host);
                true
            }
            WallCommand::Tick(id) => {
                if !self.frames.begin_tick(id) {
                    trace!("Dropping stale frame {:?}", id);
                    return false;
                }
                if !self.should_animate() {
                    return false;
                }
                self.engine.tick(host);
                self.sync_frames(host);
                true
            }
            WallCommand::NamesLoaded(ticket, names) => {
                if ticket.0 != self.load_generation {
                    debug!("Discarding superseded load {:?}", ticket);
                    return false;
                }
                self.names = names;
                host.render_names(&self.names);
                self.engine.reset(host);
                self.sync_frames(host);
                true
            }
            WallCommand::Unmount => {
                self.frames.cancel();
                self.settle_timer = None;
                if self.playback.variant() == WallVariant::Overlay
                    && self.playback.is_visible()
                {
                    host.set_page_scroll_locked(false);
                }
                self.mounted = false;
                info!("Wall unmounted after {} frames", self.frames.frame_count());
                true
            }
        }
    }

    fn toggle(&mut self, host: &mut H) -> bool {
        let Some(state) = self.playback.toggle() else {
            return false;
        };
        host.render_playback(state);
        self.sync_frames(host);
        true
    }

    fn close(&mut self, host: &mut H) -> bool {
        if !self.playback.close() {
            return false;
        }
        host.set_overlay_visible(false);
        host.set_page_scroll_locked(false);
        self.sync_frames(host);
        self.settle_timer = Some(host.start_timer(CLOSE_TRANSITION));
        true
    }

    fn should_animate(&self) -> bool {
        self.playback.should_animate() && !self.names.is_empty()
    }

    // Schedules the next frame when animating, otherwise cancels any
    // pending one so nothing keeps running in the background.
    fn sync_frames(&mut self, host: &mut H) {
        if self.should_animate() {
            self.frames.schedule(|id| host.request_frame(id));
        } else {
            self.frames.cancel();
        }
    }
}
