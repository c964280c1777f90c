//! exr-core
//!
//! Typed header attributes and the exception taxonomy of a binary
//! image-container format.
//! No pixel codecs, no chunk tables, no threads.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod exceptions;
pub mod io;

// Attribute contract and the header-record framing built on it
pub mod attributes;
pub mod header;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::attributes::{
        Attribute, AttributeRegistry, AttributeValue, Box2i, ClosedEnum, Compression, Envmap,
        LineOrder, OpaqueAttribute, TypedAttribute,
    };
    pub use crate::exceptions::{
        set_stack_tracer, stack_tracer, ExcKind, ExcResult, Exception, MathFault, MessageBuf,
        StackTracer,
    };
    pub use crate::header::{read_header, write_header, Header};
}
