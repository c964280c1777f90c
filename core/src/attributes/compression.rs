//! attributes/compression.rs
//! Compression-method selector stored as a `compression` attribute.

use std::fmt;
use std::io::{Read, Write};

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::attributes::enums::{read_closed_enum, write_closed_enum, ClosedEnum};
use crate::attributes::types::{AttributeValue, TypedAttribute};
use crate::constants::type_names;
use crate::exceptions::ExcResult;

/// Stable compression method tags (one byte on disk).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum Compression {
    No    = 0,
    Rle   = 1,
    Zips  = 2,
    Zip   = 3,
    Piz   = 4,
    Pxr24 = 5,
    B44   = 6,
    B44a  = 7,
    Dwaa  = 8,
    Dwab  = 9,
    /// Count of methods; stands in for any unrecognized tag read from a file.
    NumCompressionMethods = 10,
}

impl Compression {
    pub const fn name(self) -> &'static str {
        match self {
            Compression::No    => "none",
            Compression::Rle   => "rle",
            Compression::Zips  => "zips",
            Compression::Zip   => "zip",
            Compression::Piz   => "piz",
            Compression::Pxr24 => "pxr24",
            Compression::B44   => "b44",
            Compression::B44a  => "b44a",
            Compression::Dwaa  => "dwaa",
            Compression::Dwab  => "dwab",
            Compression::NumCompressionMethods => "unknown",
        }
    }

    /// Scan lines grouped into one chunk by this method; `None` for the
    /// sentinel.
    pub const fn lines_per_chunk(self) -> Option<u32> {
        match self {
            Compression::No | Compression::Rle | Compression::Zips => Some(1),
            Compression::Zip | Compression::Pxr24 => Some(16),
            Compression::Piz | Compression::B44 | Compression::B44a | Compression::Dwaa => Some(32),
            Compression::Dwab => Some(256),
            Compression::NumCompressionMethods => None,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Not `#[default]`: num_enum would treat it as the catch-all for unknown bytes.
impl Default for Compression {
    fn default() -> Self {
        Compression::Zip
    }
}

impl ClosedEnum for Compression {
    const SENTINEL: Self = Compression::NumCompressionMethods;
    const VALID: &'static [Self] = &[
        Compression::No,
        Compression::Rle,
        Compression::Zips,
        Compression::Zip,
        Compression::Piz,
        Compression::Pxr24,
        Compression::B44,
        Compression::B44a,
        Compression::Dwaa,
        Compression::Dwab,
    ];
}

impl AttributeValue for Compression {
    const TYPE_NAME: &'static str = type_names::COMPRESSION;

    fn write_value<W: Write + ?Sized>(&self, os: &mut W, _version: i32) -> ExcResult<()> {
        write_closed_enum(os, *self)
    }

    fn read_value<R: Read + ?Sized>(is: &mut R, _size: i32, _version: i32) -> ExcResult<Self> {
        read_closed_enum(is)
    }
}

pub type CompressionAttribute = TypedAttribute<Compression>;
