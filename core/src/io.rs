//! io.rs
//! Byte-stream codec: little-endian primitive reads and writes.
//!
//! Design notes:
//! - All multi-byte integers and floats are little-endian on disk.
//! - Works over any `std::io::Read` / `Write`, including `&mut dyn Read`.
//! - I/O failures convert into the exception taxonomy (`From<io::Error>`).

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::exceptions::{ExcResult, Exception};

#[inline]
pub fn write_u8<W: Write + ?Sized>(os: &mut W, v: u8) -> ExcResult<()> {
    os.write_u8(v)?;
    Ok(())
}

#[inline]
pub fn read_u8<R: Read + ?Sized>(is: &mut R) -> ExcResult<u8> {
    Ok(is.read_u8()?)
}

#[inline]
pub fn write_i32<W: Write + ?Sized>(os: &mut W, v: i32) -> ExcResult<()> {
    os.write_i32::<LittleEndian>(v)?;
    Ok(())
}

#[inline]
pub fn read_i32<R: Read + ?Sized>(is: &mut R) -> ExcResult<i32> {
    Ok(is.read_i32::<LittleEndian>()?)
}

#[inline]
pub fn write_u32<W: Write + ?Sized>(os: &mut W, v: u32) -> ExcResult<()> {
    os.write_u32::<LittleEndian>(v)?;
    Ok(())
}

#[inline]
pub fn read_u32<R: Read + ?Sized>(is: &mut R) -> ExcResult<u32> {
    Ok(is.read_u32::<LittleEndian>()?)
}

#[inline]
pub fn write_f32<W: Write + ?Sized>(os: &mut W, v: f32) -> ExcResult<()> {
    os.write_f32::<LittleEndian>(v)?;
    Ok(())
}

#[inline]
pub fn read_f32<R: Read + ?Sized>(is: &mut R) -> ExcResult<f32> {
    Ok(is.read_f32::<LittleEndian>()?)
}

#[inline]
pub fn write_f64<W: Write + ?Sized>(os: &mut W, v: f64) -> ExcResult<()> {
    os.write_f64::<LittleEndian>(v)?;
    Ok(())
}

#[inline]
pub fn read_f64<R: Read + ?Sized>(is: &mut R) -> ExcResult<f64> {
    Ok(is.read_f64::<LittleEndian>()?)
}

#[inline]
pub fn write_bytes<W: Write + ?Sized>(os: &mut W, b: &[u8]) -> ExcResult<()> {
    os.write_all(b)?;
    Ok(())
}

/// Read exactly `n` bytes.
///
/// Bytes are pulled through `take` so a corrupt length cannot force a huge
/// up-front allocation.
pub fn read_bytes<R: Read + ?Sized>(is: &mut R, n: usize) -> ExcResult<Vec<u8>> {
    let mut out: Vec<u8> = Vec::new();
    Read::take(&mut *is, n as u64).read_to_end(&mut out)?;
    if out.len() != n {
        return Err(Exception::input(format!(
            "Early end of file: read {} out of {} requested bytes.",
            out.len(),
            n
        )));
    }
    Ok(out)
}

/// Write a null-terminated name.
pub fn write_name<W: Write + ?Sized>(os: &mut W, name: &str) -> ExcResult<()> {
    if name.as_bytes().contains(&0) {
        return Err(Exception::arg(format!("Name \"{}\" contains a null byte.", name.escape_debug())));
    }
    os.write_all(name.as_bytes())?;
    os.write_u8(0)?;
    Ok(())
}

/// Read a null-terminated name of at most `max_len` bytes (terminator excluded).
pub fn read_name<R: Read + ?Sized>(is: &mut R, max_len: usize) -> ExcResult<String> {
    let mut bytes: Vec<u8> = Vec::new();
    loop {
        let b = is.read_u8()?;
        if b == 0 {
            break;
        }
        if bytes.len() == max_len {
            return Err(Exception::input(format!(
                "Invalid or corrupt file: name exceeds {} characters.",
                max_len
            )));
        }
        bytes.push(b);
    }
    String::from_utf8(bytes)
        .map_err(|_| Exception::input("Invalid or corrupt file: name is not valid UTF-8."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exceptions::ExcKind;
    use std::io::Cursor;

    #[test]
    fn primitives_are_little_endian() {
        let mut out: Vec<u8> = Vec::new();
        write_i32(&mut out, 0x0102_0304).unwrap();
        write_u8(&mut out, 0xAB).unwrap();
        assert_eq!(out, [0x04, 0x03, 0x02, 0x01, 0xAB]);

        let mut is = Cursor::new(out);
        assert_eq!(read_i32(&mut is).unwrap(), 0x0102_0304);
        assert_eq!(read_u8(&mut is).unwrap(), 0xAB);
    }

    #[test]
    fn short_read_is_input_error() {
        let mut is = Cursor::new(vec![1u8, 2]);
        let err = read_i32(&mut is).unwrap_err();
        assert_eq!(err.kind(), ExcKind::Input);

        let mut is = Cursor::new(vec![1u8, 2]);
        let err = read_bytes(&mut is, 3).unwrap_err();
        assert_eq!(err.kind(), ExcKind::Input);
    }

    #[test]
    fn names_are_null_terminated_and_bounded() {
        let mut out: Vec<u8> = Vec::new();
        write_name(&mut out, "owner").unwrap();
        assert_eq!(out, b"owner\0");
        assert_eq!(read_name(&mut Cursor::new(&out), 31).unwrap(), "owner");

        let err = read_name(&mut Cursor::new(b"abcdef\0"), 3).unwrap_err();
        assert_eq!(err.kind(), ExcKind::Input);

        let err = write_name(&mut Vec::new(), "a\0b").unwrap_err();
        assert_eq!(err.kind(), ExcKind::Arg);
    }
}
