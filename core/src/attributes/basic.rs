//! attributes/basic.rs
//! Scalar, string and box payloads.

use std::io::{Read, Write};

use crate::attributes::types::{AttributeValue, TypedAttribute};
use crate::constants::type_names;
use crate::exceptions::{ExcResult, Exception};
use crate::io;

impl AttributeValue for i32 {
    const TYPE_NAME: &'static str = type_names::INT;

    fn write_value<W: Write + ?Sized>(&self, os: &mut W, _version: i32) -> ExcResult<()> {
        io::write_i32(os, *self)
    }

    fn read_value<R: Read + ?Sized>(is: &mut R, _size: i32, _version: i32) -> ExcResult<Self> {
        io::read_i32(is)
    }
}

impl AttributeValue for f32 {
    const TYPE_NAME: &'static str = type_names::FLOAT;

    fn write_value<W: Write + ?Sized>(&self, os: &mut W, _version: i32) -> ExcResult<()> {
        io::write_f32(os, *self)
    }

    fn read_value<R: Read + ?Sized>(is: &mut R, _size: i32, _version: i32) -> ExcResult<Self> {
        io::read_f32(is)
    }
}

impl AttributeValue for f64 {
    const TYPE_NAME: &'static str = type_names::DOUBLE;

    fn write_value<W: Write + ?Sized>(&self, os: &mut W, _version: i32) -> ExcResult<()> {
        io::write_f64(os, *self)
    }

    fn read_value<R: Read + ?Sized>(is: &mut R, _size: i32, _version: i32) -> ExcResult<Self> {
        io::read_f64(is)
    }
}

/// Strings carry no terminator and no length prefix: the record size is the
/// string length.
impl AttributeValue for String {
    const TYPE_NAME: &'static str = type_names::STRING;

    fn write_value<W: Write + ?Sized>(&self, os: &mut W, _version: i32) -> ExcResult<()> {
        io::write_bytes(os, self.as_bytes())
    }

    fn read_value<R: Read + ?Sized>(is: &mut R, size: i32, _version: i32) -> ExcResult<Self> {
        let len = usize::try_from(size)
            .map_err(|_| Exception::input(format!("Invalid string attribute size {}.", size)))?;
        let bytes = io::read_bytes(is, len)?;
        String::from_utf8(bytes).map_err(|_| Exception::input("String attribute is not valid UTF-8."))
    }
}

/// Integer rectangle, both corners inclusive (e.g. a data window).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Box2i {
    pub min: [i32; 2],
    pub max: [i32; 2],
}

impl Box2i {
    pub fn new(min: [i32; 2], max: [i32; 2]) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.max[0] < self.min[0] || self.max[1] < self.min[1]
    }

    pub fn width(&self) -> i64 {
        i64::from(self.max[0]) - i64::from(self.min[0]) + 1
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max[1]) - i64::from(self.min[1]) + 1
    }
}

impl AttributeValue for Box2i {
    const TYPE_NAME: &'static str = type_names::BOX2I;

    fn write_value<W: Write + ?Sized>(&self, os: &mut W, _version: i32) -> ExcResult<()> {
        io::write_i32(os, self.min[0])?;
        io::write_i32(os, self.min[1])?;
        io::write_i32(os, self.max[0])?;
        io::write_i32(os, self.max[1])
    }

    fn read_value<R: Read + ?Sized>(is: &mut R, _size: i32, _version: i32) -> ExcResult<Self> {
        let min = [io::read_i32(is)?, io::read_i32(is)?];
        let max = [io::read_i32(is)?, io::read_i32(is)?];
        Ok(Self { min, max })
    }
}

pub type IntAttribute = TypedAttribute<i32>;
pub type FloatAttribute = TypedAttribute<f32>;
pub type DoubleAttribute = TypedAttribute<f64>;
pub type StringAttribute = TypedAttribute<String>;
pub type Box2iAttribute = TypedAttribute<Box2i>;
