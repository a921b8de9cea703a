//! Logging shims.
//!
//! With the `tracing` feature on, `debug!`, `trace!` and `warn!` are the
//! `tracing` macros. Without it they swallow their arguments.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop {
    #[macro_export]
    #[doc(hidden)]
    macro_rules! __isocube_noop_log {
        ($($arg:tt)*) => {};
    }
}

#[cfg(not(feature = "tracing"))]
pub use crate::__isocube_noop_log as debug;
#[cfg(not(feature = "tracing"))]
pub use crate::__isocube_noop_log as trace;
#[cfg(not(feature = "tracing"))]
pub use crate::__isocube_noop_log as warn;
