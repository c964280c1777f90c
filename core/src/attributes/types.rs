//! attributes/types.rs
//! The typed attribute contract.
//!
//! Design notes:
//! - `AttributeValue` is implemented once per payload type and owns that
//!   type's on-disk name and binary layout.
//! - `Attribute` is the object-safe face stored in headers; the framing code
//!   dispatches through it without knowing any concrete type.
//! - `TypedAttribute<T>` bridges the two for every `T: AttributeValue`.
//! - Only the payload is encoded here. Attribute name, type name and size are
//!   written by the header-record framing.

use std::any::Any;
use std::fmt;
use std::io::{Read, Write};

use crate::exceptions::{ExcResult, Exception};

/// Per-type serialization contract for attribute payloads.
pub trait AttributeValue: Clone + fmt::Debug + Default + PartialEq + Send + Sync + 'static {
    /// On-disk discriminator. Stable across versions, unique per registry.
    const TYPE_NAME: &'static str;

    /// Serialize the payload only. Unknown versions use the current layout.
    fn write_value<W: Write + ?Sized>(&self, os: &mut W, version: i32) -> ExcResult<()>;

    /// Decode a payload the caller already framed as `size` bytes, applying
    /// this type's validation policy.
    fn read_value<R: Read + ?Sized>(is: &mut R, size: i32, version: i32) -> ExcResult<Self>;
}

/// Object-safe attribute interface stored by headers.
pub trait Attribute: fmt::Debug + Send + Sync {
    /// On-disk type name of this attribute.
    fn type_name(&self) -> &str;

    /// Deep copy.
    fn copy(&self) -> Box<dyn Attribute>;

    fn write_value_to(&self, os: &mut dyn Write, version: i32) -> ExcResult<()>;

    fn read_value_from(&mut self, is: &mut dyn Read, size: i32, version: i32) -> ExcResult<()>;

    /// Copy the value of `other`, which must have the same concrete type.
    fn copy_value_from(&mut self, other: &dyn Attribute) -> ExcResult<()>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Clone for Box<dyn Attribute> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

/// An attribute holding a single value of type `T`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedAttribute<T: AttributeValue> {
    value: T,
}

impl<T: AttributeValue> TypedAttribute<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Type name shared by every instance of this attribute type.
    pub fn static_type_name() -> &'static str {
        T::TYPE_NAME
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Downcast a generic attribute, failing with a type error.
    pub fn cast(attr: &dyn Attribute) -> ExcResult<&Self> {
        attr.as_any()
            .downcast_ref::<Self>()
            .ok_or_else(|| unexpected_type(T::TYPE_NAME, attr.type_name()))
    }

    pub fn cast_mut(attr: &mut dyn Attribute) -> ExcResult<&mut Self> {
        let actual = attr.type_name().to_owned();
        attr.as_any_mut()
            .downcast_mut::<Self>()
            .ok_or_else(|| unexpected_type(T::TYPE_NAME, &actual))
    }

    /// Factory used by the attribute registry.
    pub fn make_new() -> Box<dyn Attribute> {
        Box::new(Self::default())
    }
}

impl<T: AttributeValue> From<T> for TypedAttribute<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: AttributeValue> Attribute for TypedAttribute<T> {
    fn type_name(&self) -> &str {
        T::TYPE_NAME
    }

    fn copy(&self) -> Box<dyn Attribute> {
        Box::new(self.clone())
    }

    fn write_value_to(&self, os: &mut dyn Write, version: i32) -> ExcResult<()> {
        self.value.write_value(os, version)
    }

    fn read_value_from(&mut self, is: &mut dyn Read, size: i32, version: i32) -> ExcResult<()> {
        self.value = T::read_value(is, size, version)?;
        Ok(())
    }

    fn copy_value_from(&mut self, other: &dyn Attribute) -> ExcResult<()> {
        self.value = Self::cast(other)?.value.clone();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub(crate) fn unexpected_type(expected: &str, actual: &str) -> Exception {
    Exception::type_mismatch(format!(
        "Unexpected attribute type: expected \"{}\", got \"{}\".",
        expected, actual
    ))
}
