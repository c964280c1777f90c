//! attributes/line_order.rs
//! Scan line storage order (`lineOrder` attribute).

use std::io::{Read, Write};

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::attributes::enums::{read_closed_enum, write_closed_enum, ClosedEnum};
use crate::attributes::types::{AttributeValue, TypedAttribute};
use crate::constants::type_names;
use crate::exceptions::ExcResult;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum LineOrder {
    /// First scan line has lowest y coordinate.
    IncreasingY = 0,
    /// First scan line has highest y coordinate.
    DecreasingY = 1,
    /// Tiles are written in arbitrary order.
    RandomY     = 2,
    NumLineOrders = 3,
}

impl Default for LineOrder {
    fn default() -> Self {
        LineOrder::IncreasingY
    }
}

impl ClosedEnum for LineOrder {
    const SENTINEL: Self = LineOrder::NumLineOrders;
    const VALID: &'static [Self] = &[LineOrder::IncreasingY, LineOrder::DecreasingY, LineOrder::RandomY];
}

impl AttributeValue for LineOrder {
    const TYPE_NAME: &'static str = type_names::LINE_ORDER;

    fn write_value<W: Write + ?Sized>(&self, os: &mut W, _version: i32) -> ExcResult<()> {
        write_closed_enum(os, *self)
    }

    fn read_value<R: Read + ?Sized>(is: &mut R, _size: i32, _version: i32) -> ExcResult<Self> {
        read_closed_enum(is)
    }
}

pub type LineOrderAttribute = TypedAttribute<LineOrder>;
