/// Current file format version (low byte of the version field).
pub const EXR_VERSION: i32 = 2;

/// Version flag: attribute and channel names may exceed 31 characters.
pub const LONG_NAMES_FLAG: i32 = 0x0000_0400;

/// Mask selecting the format version number from the version field.
pub const VERSION_NUMBER_FIELD: i32 = 0x0000_00ff;

/// Longest attribute name (and type name) without `LONG_NAMES_FLAG`.
pub const SHORT_NAME_MAX: usize = 31;

/// Longest attribute name (and type name) with `LONG_NAMES_FLAG`.
pub const LONG_NAME_MAX: usize = 255;

/// Name length limit implied by a version field.
#[inline]
pub fn max_name_length(version: i32) -> usize {
    if version & LONG_NAMES_FLAG != 0 {
        LONG_NAME_MAX
    } else {
        SHORT_NAME_MAX
    }
}

/// Stable on-disk type names for the built-in attribute types.
pub mod type_names {
    pub const INT: &str         = "int";
    pub const FLOAT: &str       = "float";
    pub const DOUBLE: &str      = "double";
    pub const STRING: &str      = "string";
    pub const BOX2I: &str       = "box2i";
    pub const COMPRESSION: &str = "compression";
    pub const LINE_ORDER: &str  = "lineOrder";
    pub const ENVMAP: &str      = "envmap";
}

/// Well-known attribute names used by the default header.
pub mod attribute_names {
    pub const COMPRESSION: &str = "compression";
    pub const LINE_ORDER: &str  = "lineOrder";
    pub const DATA_WINDOW: &str = "dataWindow";
}
