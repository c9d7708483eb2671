//! Register transport.
//!
//! The driver never touches the bus directly. It issues single-register
//! reads and writes through [`RegisterTransport`], and an attach-time
//! [`BindTransport`] turns whatever the board hands over (an SPI device, a
//! test double) into that transport using [`REGISTER_CONFIG`].

use crate::error::ConfigError;
use crate::registers::{MAX_REGISTER, READ_FLAG};

/// Single-register read/write capability.
pub trait RegisterTransport {
    /// Error type for a failed bus transaction.
    type Error;

    /// Read the byte held at `addr`.
    fn read(&mut self, addr: u8) -> Result<u8, Self::Error>;

    /// Write `value` to `addr`.
    fn write(&mut self, addr: u8, value: u8) -> Result<(), Self::Error>;
}

/// Register-map framing parameters a transport must honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterConfig {
    /// Address width in bits.
    pub reg_bits: u8,
    /// Value width in bits.
    pub val_bits: u8,
    /// Flag OR-ed into the address byte on reads.
    pub read_flag_mask: u8,
    /// Highest addressable register.
    pub max_register: u8,
}

/// ADA4250 framing: 8-bit address, 8-bit value, bit 7 marks a read.
pub const REGISTER_CONFIG: RegisterConfig = RegisterConfig {
    reg_bits: 8,
    val_bits: 8,
    read_flag_mask: READ_FLAG,
    max_register: MAX_REGISTER,
};

impl RegisterConfig {
    /// Check that the framing can be carried by a byte-wide transport.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reg_bits != 8 || self.val_bits != 8 {
            return Err(ConfigError::UnsupportedWordSize {
                reg_bits: self.reg_bits,
                val_bits: self.val_bits,
            });
        }
        if self.read_flag_mask.count_ones() != 1 || self.read_flag_mask <= self.max_register {
            return Err(ConfigError::ReadFlagOverlapsAddress {
                flag: self.read_flag_mask,
                max_register: self.max_register,
            });
        }
        Ok(())
    }
}

/// Attach-time conversion of a bus endpoint into a [`RegisterTransport`].
pub trait BindTransport {
    /// The transport produced on success.
    type Transport: RegisterTransport;
    /// Error raised when the transport cannot be established.
    type Error;

    /// Configure the endpoint for `config` and hand back the transport.
    fn bind(self, config: &RegisterConfig) -> Result<Self::Transport, Self::Error>;
}

#[cfg(feature = "spi")]
pub use spi::{SpiEndpoint, SpiTransport};

#[cfg(feature = "spi")]
mod spi {
    use embedded_hal::spi::{Operation, SpiDevice};

    use super::{BindTransport, RegisterConfig, RegisterTransport};
    use crate::error::ConfigError;

    /// [`RegisterTransport`] over an [`embedded_hal::spi::SpiDevice`].
    ///
    /// Writes are one `[addr, value]` transfer. Reads send `addr | flag`
    /// then clock in one byte, inside a single chip-select assertion.
    pub struct SpiTransport<SPI> {
        spi: SPI,
        read_flag: u8,
    }

    impl<SPI: SpiDevice> SpiTransport<SPI> {
        /// Wrap `spi`, rejecting configurations the framing cannot carry.
        pub fn new(spi: SPI, config: &RegisterConfig) -> Result<Self, ConfigError> {
            if let Err(e) = config.validate() {
                #[cfg(feature = "defmt")]
                defmt::warn!("rejecting register config: {}", e);
                return Err(e);
            }
            Ok(Self {
                spi,
                read_flag: config.read_flag_mask,
            })
        }

        /// Consume the transport and return the SPI device.
        pub fn release(self) -> SPI {
            self.spi
        }
    }

    impl<SPI: SpiDevice> RegisterTransport for SpiTransport<SPI> {
        type Error = SPI::Error;

        fn read(&mut self, addr: u8) -> Result<u8, Self::Error> {
            let cmd = [addr | self.read_flag];
            let mut buf = [0u8; 1];
            self.spi
                .transaction(&mut [Operation::Write(&cmd), Operation::Read(&mut buf)])?;
            Ok(buf[0])
        }

        fn write(&mut self, addr: u8, value: u8) -> Result<(), Self::Error> {
            self.spi.write(&[addr, value])
        }
    }

    /// An SPI device as handed over by the board, not yet bound.
    pub struct SpiEndpoint<SPI>(pub SPI);

    impl<SPI: SpiDevice> BindTransport for SpiEndpoint<SPI> {
        type Transport = SpiTransport<SPI>;
        type Error = ConfigError;

        fn bind(self, config: &RegisterConfig) -> Result<Self::Transport, Self::Error> {
            SpiTransport::new(self.0, config)
        }
    }
}
