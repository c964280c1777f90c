//! exceptions/tracer.rs
//! Stack-tracing support.
//!
//! A stack tracer renders the current call stack as text. When one is
//! installed, every traced `Exception` constructor calls it and stores the
//! result; `Exception::stack_trace()` is empty otherwise.
//!
//! Known race: `set_stack_tracer` is a rarely-flipped configuration switch.
//! An exception constructed concurrently with a replacement observes either
//! the old or the new tracer. Callers that need a strict ordering must
//! serialize their own calls to `set_stack_tracer`. A trace is never torn:
//! the function pointer is copied out under the lock and called after it is
//! released.

use parking_lot::RwLock;
use tracing::debug;

/// Produces a printable representation of the current call stack.
pub type StackTracer = fn() -> String;

static STACK_TRACER: RwLock<Option<StackTracer>> = parking_lot::const_rwlock(None);

/// Install `tracer` as the process-wide stack tracer, or remove the current
/// one with `None`.
pub fn set_stack_tracer(tracer: Option<StackTracer>) {
    *STACK_TRACER.write() = tracer;
    debug!(installed = tracer.is_some(), "stack tracer replaced");
}

/// The currently installed stack tracer, if any.
pub fn stack_tracer() -> Option<StackTracer> {
    *STACK_TRACER.read()
}

/// A ready-made tracer backed by `std::backtrace`, ignoring `RUST_BACKTRACE`.
pub fn capture_backtrace() -> String {
    std::backtrace::Backtrace::force_capture().to_string()
}

/// Run `tracer` if present; the empty string otherwise.
#[inline]
pub(crate) fn trace_with(tracer: Option<StackTracer>) -> String {
    tracer.map(|t| t()).unwrap_or_default()
}
