//! ADA4250 device driver.
//!
//! One [`Ada4250`] value exists per attached chip. It owns the register
//! transport from [`initialize`](Ada4250::initialize) until
//! [`teardown`](Ada4250::teardown) consumes it, so no operation can reach
//! the bus outside that window.
//!
//! Every attribute operation is a single register transaction, except the
//! read-modify-write field setters and [`chip_info`](Ada4250::chip_info).
//!
//! # Example
//!
//! ```ignore
//! let mut amp = Ada4250::initialize(
//!     SpiEndpoint(spi),
//!     &Attach { name: "ada4250", compatible: Some("adi,ada4250") },
//!     &SUPPORTED,
//!     &mut host,
//! )?;
//! amp.set_gain(Gain::G16)?;
//! amp.set_calibration_config(BiasMode::BandgapReference, 1)?;
//! let spi = amp.teardown(&mut host).release();
//! ```

use crate::control::{AttrValue, AttributeAccess, RegAccess};
use crate::error::{Error, InitError};
use crate::gain::Gain;
use crate::host::{
    Attach, ChannelInfo, ChannelSpec, DeviceDescriptor, Host, MatchTable, Part, RegistrationId,
    CHANNELS,
};
use crate::registers::{self as reg, BiasMode};
use crate::transport::{BindTransport, RegisterTransport, REGISTER_CONFIG};

type Result<V, E> = core::result::Result<V, Error<E>>;

/// Identification registers read back from the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipInfo {
    pub die_revision: u8,
    pub chip_id1: u8,
    pub chip_id2: u8,
}

/// ADA4250 programmable-gain amplifier driver.
///
/// Generic over the register transport; on hardware this is
/// [`SpiTransport`](crate::transport::SpiTransport).
pub struct Ada4250<T> {
    transport: T,
    part: Part,
    registration: RegistrationId,
    /// Last programmed bias mode. Not read back from the chip.
    bias: BiasMode,
}

impl<T: RegisterTransport> Ada4250<T> {
    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Attach a device.
    ///
    /// Resolves the part from `table`, binds the transport with
    /// [`REGISTER_CONFIG`], then registers the channel table with `host`
    /// under `attach.name`. Each step runs only if the previous one
    /// succeeded, so a binding failure never reaches the host.
    pub fn initialize<B, H>(
        endpoint: B,
        attach: &Attach<'_>,
        table: &MatchTable,
        host: &mut H,
    ) -> core::result::Result<Self, InitError<B::Error, H::Error>>
    where
        B: BindTransport<Transport = T>,
        H: Host,
    {
        let Some(part) = table.resolve(attach) else {
            return Err(InitError::Unsupported);
        };
        let transport = match endpoint.bind(&REGISTER_CONFIG) {
            Ok(transport) => transport,
            Err(e) => return Err(InitError::Transport(e)),
        };
        let descriptor = DeviceDescriptor {
            name: attach.name,
            channels: &CHANNELS,
        };
        let registration = match host.register(&descriptor) {
            Ok(id) => id,
            Err(e) => return Err(InitError::Registration(e)),
        };

        #[cfg(feature = "defmt")]
        defmt::info!("{=str} probed", attach.name);

        Ok(Self {
            transport,
            part,
            registration,
            bias: BiasMode::Disabled,
        })
    }

    /// Detach the device: unregister from `host` and hand back the transport.
    pub fn teardown<H: Host>(self, host: &mut H) -> T {
        host.unregister(self.registration);
        self.transport
    }

    /// Part matched at attach time.
    pub fn part(&self) -> Part {
        self.part
    }

    /// Registration token issued by the host.
    pub fn registration(&self) -> RegistrationId {
        self.registration
    }

    // ── Register access ────────────────────────────────────────────────

    fn read_register(&mut self, addr: u8) -> Result<u8, T::Error> {
        if !reg::is_valid_address(addr) {
            return Err(Error::InvalidAddress(addr as u32));
        }
        self.transport
            .read(addr)
            .map_err(|error| Error::Transport { register: addr, error })
    }

    fn write_register(&mut self, addr: u8, value: u8) -> Result<(), T::Error> {
        if !reg::is_valid_address(addr) {
            return Err(Error::InvalidAddress(addr as u32));
        }
        self.transport
            .write(addr, value)
            .map_err(|error| Error::Transport { register: addr, error })
    }

    /// Read-modify-write: `new = (current & !mask) | (field & mask)`.
    fn modify(&mut self, addr: u8, field: u8, mask: u8) -> Result<u8, T::Error> {
        let current = self.read_register(addr)?;
        let new_val = reg::modify_field(current, field, mask);
        self.write_register(addr, new_val)?;
        Ok(new_val)
    }

    /// Read any register for diagnostics.
    pub fn raw_read(&mut self, addr: u8) -> Result<u8, T::Error> {
        self.read_register(addr)
    }

    /// Write any register for diagnostics.
    ///
    /// Bypasses the bias cache: writing SNSR_CAL_CNFG here leaves
    /// [`bias_mode`](Self::bias_mode) stale.
    pub fn raw_write(&mut self, addr: u8, value: u8) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ADA4250 raw write 0x{:02x} <- 0x{:02x}", addr, value);
        self.write_register(addr, value)
    }

    // ── Gain ───────────────────────────────────────────────────────────

    /// Read the 3-bit gain selector.
    pub fn get_hardware_gain(&mut self) -> Result<u8, T::Error> {
        Ok(reg::decode_gain(self.read_register(reg::GAIN_MUX)?))
    }

    /// Write the gain selector. Values above 7 are masked to 3 bits.
    pub fn set_hardware_gain(&mut self, selector: u8) -> Result<(), T::Error> {
        self.write_register(reg::GAIN_MUX, reg::encode_gain(selector))
    }

    /// Read the gain setting.
    pub fn gain(&mut self) -> Result<Gain, T::Error> {
        let selector = self.get_hardware_gain()?;
        // A 3-bit selector always maps to a gain
        Ok(Gain::from_selector(selector).unwrap_or(Gain::G1))
    }

    /// Program a gain setting.
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), T::Error> {
        self.set_hardware_gain(gain.selector())
    }

    // ── Reference buffer ───────────────────────────────────────────────

    /// Enable or disable the reference buffer.
    pub fn set_reference_buffer(&mut self, enable: bool) -> Result<(), T::Error> {
        self.write_register(
            reg::REFBUF_EN,
            reg::encode_bool_field(reg::REFBUF_BIT, enable),
        )
    }

    pub fn reference_buffer(&mut self) -> Result<bool, T::Error> {
        let value = self.read_register(reg::REFBUF_EN)?;
        Ok(reg::decode_bool_field(value, reg::REFBUF_BIT))
    }

    // ── Reset ──────────────────────────────────────────────────────────

    /// Trigger a software reset.
    ///
    /// The chip returns to its power-on register values, so the cached bias
    /// mode goes back to [`BiasMode::Disabled`].
    pub fn reset(&mut self) -> Result<(), T::Error> {
        self.write_register(reg::RESET, reg::encode_bool_field(reg::RESET_BIT, true))?;
        self.bias = BiasMode::Disabled;
        Ok(())
    }

    /// Current state of the reset bit.
    pub fn reset_state(&mut self) -> Result<bool, T::Error> {
        let value = self.read_register(reg::RESET)?;
        Ok(reg::decode_bool_field(value, reg::RESET_BIT))
    }

    // ── Sensor calibration ─────────────────────────────────────────────

    /// Store a raw calibration value.
    pub fn set_calibration_value(&mut self, value: u8) -> Result<(), T::Error> {
        self.write_register(reg::SNSR_CAL_VAL, value & reg::SNSR_CAL_VAL_MSK)
    }

    pub fn calibration_value(&mut self) -> Result<u8, T::Error> {
        Ok(self.read_register(reg::SNSR_CAL_VAL)? & reg::SNSR_CAL_VAL_MSK)
    }

    /// Program bias mode and range together in one write.
    pub fn set_calibration_config(&mut self, bias: BiasMode, range: u8) -> Result<(), T::Error> {
        self.write_register(reg::SNSR_CAL_CNFG, reg::encode_cal_config(bias, range))?;
        self.bias = bias;
        Ok(())
    }

    /// Read bias mode and range back from the chip.
    pub fn calibration_config(&mut self) -> Result<(BiasMode, u8), T::Error> {
        let value = self.read_register(reg::SNSR_CAL_CNFG)?;
        match reg::decode_cal_config(value) {
            (Some(bias), range) => Ok((bias, range)),
            (None, _) => Err(Error::ReservedBias(value & reg::BIAS_SET_MSK)),
        }
    }

    /// Change the bias mode, keeping the range field.
    pub fn set_bias_mode(&mut self, bias: BiasMode) -> Result<(), T::Error> {
        self.modify(
            reg::SNSR_CAL_CNFG,
            reg::encode_cal_config(bias, 0),
            reg::BIAS_SET_MSK,
        )?;
        self.bias = bias;
        Ok(())
    }

    /// Change the range, keeping the bias field.
    pub fn set_range(&mut self, range: u8) -> Result<(), T::Error> {
        self.modify(
            reg::SNSR_CAL_CNFG,
            reg::encode_cal_config(BiasMode::Disabled, range),
            reg::RANGE_SET_MSK,
        )?;
        Ok(())
    }

    /// Last programmed bias mode (cached, no bus traffic).
    pub fn bias_mode(&self) -> BiasMode {
        self.bias
    }

    // ── Identification ─────────────────────────────────────────────────

    /// Read the die revision and chip ID registers.
    pub fn chip_info(&mut self) -> Result<ChipInfo, T::Error> {
        Ok(ChipInfo {
            die_revision: self.read_register(reg::DIE_REV)?,
            chip_id1: self.read_register(reg::CHIP_ID1)?,
            chip_id2: self.read_register(reg::CHIP_ID2)?,
        })
    }
}

// ── AttributeAccess trait implementation ───────────────────────────────────

impl<T: RegisterTransport> AttributeAccess for Ada4250<T> {
    type Error = Error<T::Error>;

    fn read_attribute(
        &mut self,
        _channel: &ChannelSpec,
        info: ChannelInfo,
    ) -> core::result::Result<AttrValue, Self::Error> {
        match info {
            ChannelInfo::HardwareGain => Ok(AttrValue::Int(self.get_hardware_gain()? as i32)),
            ChannelInfo::Offset => Ok(AttrValue::Unhandled),
        }
    }

    fn write_attribute(
        &mut self,
        _channel: &ChannelSpec,
        info: ChannelInfo,
        val: i32,
        _val2: i32,
    ) -> core::result::Result<(), Self::Error> {
        match info {
            // Truncate to a byte, then the encoder masks to 3 bits
            ChannelInfo::HardwareGain => self.set_hardware_gain(val as u8),
            ChannelInfo::Offset => Ok(()),
        }
    }

    fn raw_access(
        &mut self,
        reg: u32,
        access: RegAccess,
    ) -> core::result::Result<Option<u8>, Self::Error> {
        let Ok(addr) = u8::try_from(reg) else {
            return Err(Error::InvalidAddress(reg));
        };
        match access {
            RegAccess::Read => self.raw_read(addr).map(Some),
            RegAccess::Write(value) => self.raw_write(addr, value).map(|()| None),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
