#![allow(dead_code)]

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use log::{Level, LevelFilter, Log, Metadata, Record};
use rand::SeedableRng;
use rand::rngs::StdRng;
use signers_wall::motion::ScrollRegion;
use signers_wall::names::{NameSequence, prepare_sequence};
use signers_wall::runtime::{FrameId, PlaybackState, WallHost};

pub const SIGNERS_CSV: &str = "name\nAda\nGrace\n";

pub fn sequence(csv: &str, repeat: usize) -> NameSequence {
    let mut rng = StdRng::seed_from_u64(7);
    prepare_sequence(csv, repeat, &mut rng)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FakeTimer(pub Duration);

/// Records every effect the runtime asks for.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub reduced_motion: bool,
    pub scroll_height: f64,
    pub scroll_top: f64,
    pub requested_frames: Vec<FrameId>,
    pub timers: Vec<Duration>,
    pub rendered_names: Vec<usize>,
    pub playback_renders: Vec<PlaybackState>,
    pub overlay_visible: Option<bool>,
    pub scroll_locked: bool,
    pub lock_changes: usize,
}

impl FakeHost {
    pub fn new(scroll_height: f64) -> Self {
        Self {
            scroll_height,
            ..Self::default()
        }
    }

    pub fn reduced_motion(mut self) -> Self {
        self.reduced_motion = true;
        self
    }

    pub fn last_frame(&self) -> Option<FrameId> {
        self.requested_frames.last().copied()
    }

    pub fn last_playback(&self) -> Option<PlaybackState> {
        self.playback_renders.last().copied()
    }
}

impl ScrollRegion for FakeHost {
    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn set_scroll_top(&mut self, top: f64) {
        self.scroll_top = top;
    }
}

impl WallHost for FakeHost {
    type Frame = FrameId;
    type Timer = FakeTimer;

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn request_frame(&mut self, id: FrameId) -> FrameId {
        self.requested_frames.push(id);
        id
    }

    fn start_timer(&mut self, delay: Duration) -> FakeTimer {
        self.timers.push(delay);
        FakeTimer(delay)
    }

    fn render_names(&mut self, names: &NameSequence) {
        self.rendered_names.push(names.len());
    }

    fn render_playback(&mut self, state: PlaybackState) {
        self.playback_renders.push(state);
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = Some(visible);
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
        self.lock_changes += 1;
    }
}

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn logger() -> &'static CapturingLogger {
    static LOGGER: OnceLock<CapturingLogger> = OnceLock::new();
    let mut installed = false;
    let logger = LOGGER.get_or_init(|| {
        installed = true;
        CapturingLogger {
            records: Mutex::new(Vec::new()),
        }
    });
    if installed {
        log::set_logger(logger).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    }
    logger
}

/// Clears captured records. Tests using this must be `#[serial]`.
pub fn capture_logs() {
    logger().records.lock().unwrap().clear();
}

pub fn captured(level: Level) -> Vec<String> {
    logger()
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, message)| message.clone())
        .collect()
}
