//! attributes/opaque.rs
//! Attributes whose type name no registry entry knows.
//!
//! The payload is kept verbatim so an unknown attribute survives a
//! read/write cycle unchanged.

use std::any::Any;
use std::fmt;
use std::io::{Read, Write};

use crate::attributes::types::{unexpected_type, Attribute};
use crate::exceptions::{ExcResult, Exception};
use crate::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueAttribute {
    type_name: String,
    data: Vec<u8>,
}

impl OpaqueAttribute {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), data: Vec::new() }
    }

    pub fn with_data(type_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self { type_name: type_name.into(), data }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for OpaqueAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes) {}", self.type_name, self.data.len(), fmt_bytes(&self.data))
    }
}

impl Attribute for OpaqueAttribute {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn copy(&self) -> Box<dyn Attribute> {
        Box::new(self.clone())
    }

    fn write_value_to(&self, os: &mut dyn Write, _version: i32) -> ExcResult<()> {
        io::write_bytes(os, &self.data)
    }

    fn read_value_from(&mut self, is: &mut dyn Read, size: i32, _version: i32) -> ExcResult<()> {
        let len = usize::try_from(size)
            .map_err(|_| Exception::input(format!("Invalid attribute size {}.", size)))?;
        self.data = io::read_bytes(is, len)?;
        Ok(())
    }

    fn copy_value_from(&mut self, other: &dyn Attribute) -> ExcResult<()> {
        match other.as_any().downcast_ref::<OpaqueAttribute>() {
            Some(o) if o.type_name == self.type_name => {
                self.data = o.data.clone();
                Ok(())
            }
            _ => Err(unexpected_type(&self.type_name, other.type_name())),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Render bytes as text when printable, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}
