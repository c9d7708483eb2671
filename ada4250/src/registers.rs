//! ADA4250 register addresses, bitfield masks and field codecs.
//!
//! Register addresses are 8-bit and every register holds one 8-bit value.
//! The SPI framing sets bit 7 of the address byte for reads, so the
//! addressable range stops at [`MAX_REGISTER`].
//!
//! The functions here are pure: they pack attribute values into register
//! bytes and extract them again. Inputs outside a field's domain are masked
//! to the field width rather than rejected.

// ── Framing ────────────────────────────────────────────────────────────────

/// Highest addressable register.
pub const MAX_REGISTER: u8 = 0x1A;

/// Flag OR-ed into the address byte of a read transaction.
pub const READ_FLAG: u8 = 1 << 7;

// ── Register map ───────────────────────────────────────────────────────────

/// Gain / mux control.
/// - Bits 2:0 — GAIN (selector 0–7, 1 V/V .. 128 V/V)
pub const GAIN_MUX: u8 = 0x00;

/// Reference buffer enable.
/// - Bit 0 — REFBUF_EN
pub const REFBUF_EN: u8 = 0x01;

/// Software reset.
/// - Bit 0 — RESET (write 1 to reset)
pub const RESET: u8 = 0x02;

/// Sensor calibration value (full byte, stored verbatim).
pub const SNSR_CAL_VAL: u8 = 0x04;

/// Sensor calibration configuration.
/// - Bits 3:2 — RANGE_SET
/// - Bits 1:0 — BIAS_SET (0=disabled, 1=bandgap reference, 2=AVDD)
pub const SNSR_CAL_CNFG: u8 = 0x05;

/// Die revision (read-only).
pub const DIE_REV: u8 = 0x18;

/// Chip ID, first byte (read-only).
pub const CHIP_ID1: u8 = 0x19;

/// Chip ID, second byte (read-only).
pub const CHIP_ID2: u8 = 0x1A;

// ── Field masks ────────────────────────────────────────────────────────────

pub const GAIN_MUX_MSK: u8 = 0b0000_0111;
pub const REFBUF_MSK: u8 = 1 << 0;
pub const RESET_MSK: u8 = 1 << 0;
pub const SNSR_CAL_VAL_MSK: u8 = 0xFF;
pub const BIAS_SET_MSK: u8 = 0b0000_0011;
pub const RANGE_SET_MSK: u8 = 0b0000_1100;

const RANGE_SET_SHIFT: u8 = 2;

/// Bit position of REFBUF_EN within [`REFBUF_EN`].
pub const REFBUF_BIT: u8 = 0;

/// Bit position of RESET within [`RESET`].
pub const RESET_BIT: u8 = 0;

// ── Bias mode ──────────────────────────────────────────────────────────────

/// Calibration-sensor bias source (BIAS_SET field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BiasMode {
    /// Bias disabled (power-on default).
    #[default]
    Disabled = 0,
    /// Biased from the internal bandgap reference.
    BandgapReference = 1,
    /// Biased from the AVDD supply rail.
    Avdd = 2,
}

impl BiasMode {
    /// Raw two-bit field value.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a BIAS_SET field value. `0b11` is reserved and yields `None`.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & BIAS_SET_MSK {
            0 => Some(Self::Disabled),
            1 => Some(Self::BandgapReference),
            2 => Some(Self::Avdd),
            _ => None,
        }
    }
}

// ── Address validation ─────────────────────────────────────────────────────

/// Whether `addr` lies inside the addressable register range.
pub const fn is_valid_address(addr: u8) -> bool {
    addr <= MAX_REGISTER
}

// ── Field codecs ───────────────────────────────────────────────────────────

/// Pack a gain selector into GAIN_MUX bits 2:0. Higher bits are dropped.
pub const fn encode_gain(selector: u8) -> u8 {
    selector & GAIN_MUX_MSK
}

/// Extract the gain selector from a GAIN_MUX value.
pub const fn decode_gain(value: u8) -> u8 {
    value & GAIN_MUX_MSK
}

/// Pack a single-bit flag at `bit` (0–7).
pub const fn encode_bool_field(bit: u8, value: bool) -> u8 {
    (value as u8) << (bit & 7)
}

/// Extract the single-bit flag at `bit` (0–7).
pub const fn decode_bool_field(value: u8, bit: u8) -> bool {
    (value >> (bit & 7)) & 1 != 0
}

/// Pack bias mode (bits 1:0) and range (bits 3:2) into a SNSR_CAL_CNFG
/// value. `range` is masked to two bits.
pub const fn encode_cal_config(bias: BiasMode, range: u8) -> u8 {
    (bias.bits() & BIAS_SET_MSK) | ((range << RANGE_SET_SHIFT) & RANGE_SET_MSK)
}

/// Split a SNSR_CAL_CNFG value into bias mode and range.
///
/// The bias mode is `None` when the register holds the reserved encoding.
pub const fn decode_cal_config(value: u8) -> (Option<BiasMode>, u8) {
    (
        BiasMode::from_bits(value & BIAS_SET_MSK),
        (value & RANGE_SET_MSK) >> RANGE_SET_SHIFT,
    )
}

/// Read-modify-write merge: `(current & !mask) | (field & mask)`.
pub const fn modify_field(current: u8, field: u8, mask: u8) -> u8 {
    (current & !mask) | (field & mask)
}
