//! attributes/enums.rs
//! Validation policy shared by every enum-backed attribute.
//!
//! Policy:
//! - Encode: the tag as a single unsigned byte, verbatim.
//! - Decode: one byte; anything outside `VALID` becomes `SENTINEL`.
//!   Decoding never fails on an unknown tag. `Header::sanity_check` is
//!   where a sentinel turns into an input error, so one unknown field does
//!   not stop the rest of the header from being read.

use std::fmt;
use std::io::{Read, Write};

use tracing::warn;

use crate::exceptions::ExcResult;
use crate::io;

/// A closed enumeration stored in one byte with a reserved sentinel.
pub trait ClosedEnum: Copy + Eq + fmt::Debug + Into<u8> + TryFrom<u8> + 'static {
    /// Reserved "count" member; a legal in-memory value, never a valid tag.
    const SENTINEL: Self;

    /// Every valid tag.
    const VALID: &'static [Self];

    fn is_valid(self) -> bool {
        Self::VALID.contains(&self)
    }

    /// Map a raw byte to a valid tag, or to `SENTINEL`.
    fn from_raw(raw: u8) -> Self {
        match Self::try_from(raw) {
            Ok(tag) if tag.is_valid() => tag,
            _ => Self::SENTINEL,
        }
    }
}

pub fn write_closed_enum<E, W>(os: &mut W, tag: E) -> ExcResult<()>
where
    E: ClosedEnum,
    W: Write + ?Sized,
{
    io::write_u8(os, tag.into())
}

pub fn read_closed_enum<E, R>(is: &mut R) -> ExcResult<E>
where
    E: ClosedEnum,
    R: Read + ?Sized,
{
    let raw = io::read_u8(is)?;
    let tag = E::from_raw(raw);
    if !tag.is_valid() {
        warn!(
            raw,
            substituted = ?tag,
            "unrecognized enum tag; stored sentinel"
        );
    }
    Ok(tag)
}
