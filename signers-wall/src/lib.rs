pub mod core;
pub mod motion;
pub mod names;
pub mod prelude;
pub mod runtime;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use runtime::{WallConfig, WallRuntime};
