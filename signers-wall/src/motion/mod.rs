pub mod scroll;

pub use scroll::{DEFAULT_SCROLL_STEP, ScrollEngine, ScrollRegion, ScrollTick};
