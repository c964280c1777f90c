//! header/decode.rs
//!
//! Header decoding.
//!
//! Design notes:
//! - Each record is framed (`name`, `type name`, `size`) before the payload
//!   is handed to the attribute's own decoder.
//! - A type name that disagrees with an attribute already in the header is an
//!   input error at once, before any payload decoding.
//! - The framing owns the size contract: the decoder must consume exactly
//!   `size` bytes.
//! - Unknown type names are kept as `OpaqueAttribute`.
//! - Enum sentinels are not rejected here; call `Header::sanity_check`.

use std::io::{Cursor, Read};

use tracing::{debug, warn};

use crate::attributes::{Attribute, AttributeRegistry, OpaqueAttribute};
use crate::constants::max_name_length;
use crate::exceptions::{ExcResult, Exception};
use crate::header::types::Header;
use crate::io;

/// Read one attribute record into `header`.
///
/// # Returns
/// - `Ok(Some(name))` for a decoded attribute.
/// - `Ok(None)` at the end-of-header byte.
pub fn read_attribute_into<R: Read + ?Sized>(
    header: &mut Header,
    is: &mut R,
    registry: &AttributeRegistry,
    version: i32,
) -> ExcResult<Option<String>> {
    let max = max_name_length(version);

    let name = io::read_name(is, max)?;
    if name.is_empty() {
        return Ok(None);
    }
    let type_name = io::read_name(is, max)?;
    let size = io::read_i32(is)?;
    let len = usize::try_from(size).map_err(|_| {
        Exception::input(format!("Invalid size field in header attribute \"{}\".", name))
    })?;
    let payload = io::read_bytes(is, len)?;

    match header.get_mut(&name) {
        Some(existing) => {
            if existing.type_name() != type_name {
                return Err(Exception::input(format!(
                    "Unexpected type for image attribute \"{}\": expected \"{}\", got \"{}\".",
                    name,
                    existing.type_name(),
                    type_name
                )));
            }
            decode_payload(existing, &name, &payload, size, version)?;
        }
        None => {
            let mut attr: Box<dyn Attribute> = if registry.is_known(&type_name) {
                registry.new_attribute(&type_name)?
            } else {
                warn!(name = %name, type_name = %type_name, size, "unknown attribute type; kept opaque");
                Box::new(OpaqueAttribute::new(type_name.as_str()))
            };
            decode_payload(&mut *attr, &name, &payload, size, version)?;
            header.insert_attribute(&name, attr)?;
        }
    }

    debug!(name = %name, type_name = %type_name, size, "attribute decoded");
    Ok(Some(name))
}

fn decode_payload(
    attr: &mut dyn Attribute,
    name: &str,
    payload: &[u8],
    size: i32,
    version: i32,
) -> ExcResult<()> {
    let mut cursor = Cursor::new(payload);
    attr.read_value_from(&mut cursor, size, version).map_err(|mut e| {
        let text = format!("Cannot read image attribute \"{}\". {}", name, e.message());
        e.assign(&text);
        e
    })?;

    let consumed = cursor.position();
    if consumed != payload.len() as u64 {
        return Err(Exception::input(format!(
            "Invalid size for image attribute \"{}\": {} bytes framed, {} decoded.",
            name,
            payload.len(),
            consumed
        )));
    }
    Ok(())
}

/// Read records into `header` until the end-of-header byte.
pub fn read_header_into<R: Read + ?Sized>(
    header: &mut Header,
    is: &mut R,
    registry: &AttributeRegistry,
    version: i32,
) -> ExcResult<()> {
    while read_attribute_into(header, is, registry, version)?.is_some() {}
    Ok(())
}

/// Read a header, starting from `Header::default()` so the predefined
/// attributes keep their types.
pub fn read_header<R: Read + ?Sized>(
    is: &mut R,
    registry: &AttributeRegistry,
    version: i32,
) -> ExcResult<Header> {
    let mut header = Header::default();
    read_header_into(&mut header, is, registry, version)?;
    Ok(header)
}
