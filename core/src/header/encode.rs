//! header/encode.rs
//!
//! Header encoding.
//!
//! Record layout (repeated per attribute, then a single 0 byte):
//!
//! ```text
//! [ attribute name (N) ][ 0 ]
//! [ type name (T) ][ 0 ]
//! [ payload size (i32, little-endian) ]
//! [ payload (size bytes) ]
//! ```

use std::io::Write;

use crate::attributes::Attribute;
use crate::constants::max_name_length;
use crate::exceptions::{ExcResult, Exception};
use crate::header::types::Header;
use crate::io;

/// Write one attribute record.
///
/// The payload is rendered first so its size can precede it.
pub fn write_attribute<W: Write + ?Sized>(
    os: &mut W,
    name: &str,
    attr: &dyn Attribute,
    version: i32,
) -> ExcResult<()> {
    let max = max_name_length(version);
    for n in [name, attr.type_name()] {
        if n.len() > max {
            return Err(Exception::arg(format!(
                "Name \"{}\" is longer than {} characters; set the long-names version flag.",
                n, max
            )));
        }
    }

    let mut payload: Vec<u8> = Vec::new();
    attr.write_value_to(&mut payload, version)?;
    let size = i32::try_from(payload.len()).map_err(|_| {
        Exception::arg(format!("Image attribute \"{}\" is too large to store.", name))
    })?;

    io::write_name(os, name)?;
    io::write_name(os, attr.type_name())?;
    io::write_i32(os, size)?;
    io::write_bytes(os, &payload)
}

/// Write every attribute in name order, then the end-of-header byte.
pub fn write_header<W: Write + ?Sized>(os: &mut W, header: &Header, version: i32) -> ExcResult<()> {
    for (name, attr) in header.iter() {
        write_attribute(os, name, attr, version)?;
    }
    io::write_u8(os, 0)
}
