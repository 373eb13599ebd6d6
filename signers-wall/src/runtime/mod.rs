pub mod app;
pub mod config;
pub mod events;
pub mod frame_loop;
pub mod loader;
pub mod playback;

pub use app::{WallHost, WallRuntime};
pub use config::{CallToAction, GLOBAL_CONFIG_KEY, WallConfig};
pub use events::{KeyAction, KeyFocus, WallCommand, WallKey, key_action};
pub use frame_loop::{FrameId, FrameLoop};
pub use loader::{LoadError, LoadTicket, prepare_loaded};
pub use playback::{CLOSE_TRANSITION, Playback, PlaybackState, WallVariant};
