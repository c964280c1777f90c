//! attributes/mod.rs
//! Named, strongly typed header metadata.
//!
//! Notes:
//! - Each payload type implements `AttributeValue` once; `TypedAttribute<T>`
//!   turns it into a storable `Attribute`.
//! - `AttributeRegistry` maps on-disk type names to factories.
//! - Enum-backed payloads follow the closed-enum policy in `enums`.

pub mod types;
pub mod enums;
pub mod basic;
pub mod compression;
pub mod line_order;
pub mod envmap;
pub mod opaque;
pub mod registry;

pub use types::*;
pub use enums::*;
pub use basic::*;
pub use compression::*;
pub use line_order::*;
pub use envmap::*;
pub use opaque::*;
pub use registry::*;
