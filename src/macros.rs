/// Emits a `tracing::debug!` event under the `polygraph` target.
///
/// Expands to nothing unless the `tracing` feature is enabled, so the
/// arguments must not be the only use of a binding.
macro_rules! graph_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(target: "polygraph", $($arg)+);
        }
    };
}

pub(crate) use graph_trace;
