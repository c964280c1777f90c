//! attributes/envmap.rs
//! Environment map projection (`envmap` attribute).

use std::io::{Read, Write};

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::attributes::enums::{read_closed_enum, write_closed_enum, ClosedEnum};
use crate::attributes::types::{AttributeValue, TypedAttribute};
use crate::constants::type_names;
use crate::exceptions::ExcResult;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum Envmap {
    LatLong = 0,
    Cube    = 1,
    NumEnvmapTypes = 2,
}

impl Default for Envmap {
    fn default() -> Self {
        Envmap::LatLong
    }
}

impl ClosedEnum for Envmap {
    const SENTINEL: Self = Envmap::NumEnvmapTypes;
    const VALID: &'static [Self] = &[Envmap::LatLong, Envmap::Cube];
}

impl AttributeValue for Envmap {
    const TYPE_NAME: &'static str = type_names::ENVMAP;

    fn write_value<W: Write + ?Sized>(&self, os: &mut W, _version: i32) -> ExcResult<()> {
        write_closed_enum(os, *self)
    }

    fn read_value<R: Read + ?Sized>(is: &mut R, _size: i32, _version: i32) -> ExcResult<Self> {
        read_closed_enum(is)
    }
}

pub type EnvmapAttribute = TypedAttribute<Envmap>;
