//! Driver error types.

use thiserror::Error;

/// Error returned by register and attribute operations.
///
/// `E` is the transport's own error type, passed through unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// The register address lies outside `0x00..=0x1A`. Nothing was sent.
    #[error("register address {0:#04x} is outside the register map")]
    InvalidAddress(u32),

    /// The bus transaction for `register` failed.
    #[error("transport error on register {register:#04x}: {error:?}")]
    Transport { register: u8, error: E },

    /// SNSR_CAL_CNFG holds the reserved bias encoding.
    #[error("calibration config holds reserved bias encoding {0:#04x}")]
    ReservedBias(u8),
}

/// Error returned when attaching a device fails.
///
/// No handle exists after any of these; nothing is left registered with the
/// host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InitError<B, H> {
    /// Neither the compatible string nor the name matched the device tables.
    #[error("no supported part matches this device")]
    Unsupported,

    /// The register transport could not be established.
    #[error("transport binding failed: {0:?}")]
    Transport(B),

    /// The host framework refused the registration.
    #[error("host registration failed: {0:?}")]
    Registration(H),
}

/// Unusable register-map configuration handed to a transport binder.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Only 8-bit addresses carrying 8-bit values are supported.
    #[error("unsupported word size: {reg_bits}-bit register, {val_bits}-bit value")]
    UnsupportedWordSize { reg_bits: u8, val_bits: u8 },

    /// The read flag must be a single bit above the addressable range.
    #[error("read flag {flag:#04x} overlaps addresses up to {max_register:#04x}")]
    ReadFlagOverlapsAddress { flag: u8, max_register: u8 },
}
