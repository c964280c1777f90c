//! header/mod.rs
//! Header-record framing around typed attributes.
//!
//! Notes:
//! - Records are `name\0 type\0 size payload`; a lone 0 byte ends the header.
//! - Decoding dispatches on the type name through `AttributeRegistry`.
//! - Validation of decoded values is deferred to `Header::sanity_check`.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
