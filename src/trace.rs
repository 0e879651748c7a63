//! Stage instrumentation.
//!
//! Each macro is defined once and picks its body with `#[cfg]` at the call
//! site. With the `tracing` feature off, field expressions of events are still
//! evaluated once and span fields are dropped unevaluated.

/// Info-level span for one post-processing stage.
///
/// Use as `let _span = trace_span!("nms", input = n).entered();`.
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {{
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!($name $(, $($field)*)?);
        #[cfg(not(feature = "tracing"))]
        let span = $crate::trace::StageSpan;
        span
    }};
}

/// Info-level event with stage counters, e.g. how many detections survived.
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {{
        #[cfg(feature = "tracing")]
        tracing::info!(name: $name, $($key = $value),+);
        #[cfg(not(feature = "tracing"))]
        let _ = ($($value,)+);
    }};
}

/// Debug-level event for a single anchor or candidate.
macro_rules! trace_debug {
    ($($key:ident = $value:expr),+ ; $msg:literal) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!($($key = $value),+, $msg);
        #[cfg(not(feature = "tracing"))]
        let _ = ($($value,)+);
    }};
}

pub(crate) use trace_debug;
pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span stand-in when the `tracing` feature is off.
#[cfg(not(feature = "tracing"))]
#[derive(Clone, Copy, Debug)]
pub(crate) struct StageSpan;

#[cfg(not(feature = "tracing"))]
impl StageSpan {
    #[inline]
    pub(crate) fn entered(self) -> Self {
        self
    }
}
