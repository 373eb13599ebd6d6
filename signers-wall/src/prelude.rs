pub use crate::core::logging::{init_logger, init_logger_at};
pub use crate::core::logging::{debug, error, info, trace, warn};
pub use crate::motion::*;
pub use crate::names::*;
pub use crate::runtime::*;
