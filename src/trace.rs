//! Diagnostic hooks.
//!
//! With the `tracing` feature enabled, structural mutations emit `TRACE`
//! events and rejected operations emit `DEBUG` events through the
//! [`tracing`](https://docs.rs/tracing) facade. Without the feature the
//! macros expand to nothing. The crate never installs a subscriber.

#[cfg(feature = "tracing")]
macro_rules! trace_mutation {
    ($($argument:tt)*) => {
        tracing::trace!(target: "sequence_list", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_mutation {
    ($($argument:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace_rejection {
    ($error:ident) => {
        tracing::debug!(target: "sequence_list", error = %$error, "operation rejected")
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_rejection {
    ($error:ident) => {};
}

pub(crate) use trace_mutation;
pub(crate) use trace_rejection;
