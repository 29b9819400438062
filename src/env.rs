//! Runtime configuration, read from the environment once on first use.

use std::sync::LazyLock;

/// Enables lifecycle logging (drops on reset, emplace, move-assign, swap).
pub const TRACE_ENV_KEY: &str = "INPLACE_OPTIONAL_TRACE";

pub static LIFECYCLE_TRACE: LazyLock<bool> =
    LazyLock::new(|| parse_from_env(TRACE_ENV_KEY, false));

/// Whether lifecycle events should be emitted. Always `false` in release builds,
/// where the environment is never read.
#[inline]
pub(crate) fn trace_enabled() -> bool {
    if !cfg!(debug_assertions) {
        return false;
    }
    match trace_override() {
        Some(forced) => forced,
        None => *LIFECYCLE_TRACE,
    }
}

#[cfg(not(test))]
#[inline(always)]
fn trace_override() -> Option<bool> { None }

#[cfg(test)]
thread_local! {
    static TRACE_OVERRIDE: core::cell::Cell<Option<bool>> = const { core::cell::Cell::new(None) };
}

#[cfg(test)]
fn trace_override() -> Option<bool> { TRACE_OVERRIDE.with(core::cell::Cell::get) }

/// Runs `f` with the trace gate forced to `enabled` on the current thread.
#[cfg(test)]
pub(crate) fn with_trace<R>(enabled: bool, f: impl FnOnce() -> R) -> R {
    let previous = TRACE_OVERRIDE.with(|cell| cell.replace(Some(enabled)));
    let result = f();
    TRACE_OVERRIDE.with(|cell| cell.set(previous));
    result
}

mod sealed {
    pub trait Sealed: Sized + 'static {}

    impl Sealed for bool {}
}

pub trait ParseFromEnv: sealed::Sealed {
    fn parse_from_env(key: &str, default: Self) -> Self;
}

impl ParseFromEnv for bool {
    #[inline]
    fn parse_from_env(key: &str, default: bool) -> bool {
        ::std::env::var(key).ok().map(|val| parse_bool(val, default)).unwrap_or(default)
    }
}

fn parse_bool(mut val: String, default: bool) -> bool {
    let res = {
        val.make_ascii_lowercase();
        val.trim()
    };
    match res {
        "true" | "1" => true,
        "false" | "0" => false,
        _ => default,
    }
}

#[inline]
pub fn parse_from_env<T: ParseFromEnv>(key: &str, default: T) -> T {
    ParseFromEnv::parse_from_env(key, default)
}
