//! Callback interface the host framework drives.

use crate::host::{ChannelInfo, ChannelSpec};

/// Value produced by an attribute read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttrValue {
    /// Plain integer; there is no fractional component.
    Int(i32),
    /// The attribute is declared but carries no value.
    Unhandled,
}

/// Direction of a diagnostic register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegAccess {
    /// Read the register.
    Read,
    /// Write the given byte.
    Write(u8),
}

/// Trait for devices whose channel attributes the host reads and writes.
pub trait AttributeAccess {
    /// Error type for attribute operations.
    type Error;

    /// Read `info` on `channel`.
    fn read_attribute(
        &mut self,
        channel: &ChannelSpec,
        info: ChannelInfo,
    ) -> Result<AttrValue, Self::Error>;

    /// Write `val` (integer part) and `val2` (fractional part) to `info`.
    fn write_attribute(
        &mut self,
        channel: &ChannelSpec,
        info: ChannelInfo,
        val: i32,
        val2: i32,
    ) -> Result<(), Self::Error>;

    /// Raw register passthrough for debugging tools.
    ///
    /// Returns the byte read for [`RegAccess::Read`], `None` after a write.
    fn raw_access(&mut self, reg: u32, access: RegAccess) -> Result<Option<u8>, Self::Error>;
}
