//! Lifecycle logging.
//!
//! Events go through `tracing` at `debug` level and are only emitted when
//! [`LIFECYCLE_TRACE`](crate::env::LIFECYCLE_TRACE) is on. Release builds neither
//! read the environment nor emit anything.

macro_rules! debug {
    ($($arg:tt)+) => {
        if crate::env::trace_enabled() {
            ::tracing::debug!(target: "inplace_optional", $($arg)+);
        }
    };
}

pub(crate) use debug;
