//! Logging shims that forward to the `log` facade when the `log` feature is enabled and expand to
//! nothing otherwise.

macro_rules! debug_log {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::debug!($($arg)+);
    };
}

macro_rules! trace_log {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::trace!($($arg)+);
    };
}

pub(crate) use debug_log;
pub(crate) use trace_log;
