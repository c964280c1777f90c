//! exceptions/mod.rs
//! The exception taxonomy shared by every fallible operation in the crate.
//!
//! Notes:
//! - One base type, `Exception`, carries the message and the captured trace.
//! - `ExcKind` is the closed set of failure categories callers match on.
//! - `MessageBuf` is the stream-built message source (`write!` into it).
//! - The stack tracer is a process-wide switch with an injectable override.

pub mod types;
pub mod message;
pub mod tracer;

pub use types::*;
pub use message::*;
pub use tracer::*;
