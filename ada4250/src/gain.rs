//! Gain code presentation.
//!
//! The GAIN field selects a binary-weighted gain of 1 to 128 V/V. The
//! register only ever carries the selector; these helpers translate it for
//! callers that want V/V or dB.

use crate::registers::GAIN_MUX_MSK;

/// Programmable gain setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    G1 = 0,
    G2 = 1,
    G4 = 2,
    G8 = 3,
    G16 = 4,
    G32 = 5,
    G64 = 6,
    G128 = 7,
}

impl Gain {
    /// All gain settings in ascending order.
    pub const ALL: [Gain; 8] = [
        Gain::G1,
        Gain::G2,
        Gain::G4,
        Gain::G8,
        Gain::G16,
        Gain::G32,
        Gain::G64,
        Gain::G128,
    ];

    /// Look up a gain from its 3-bit selector. Selectors above 7 yield `None`.
    pub const fn from_selector(selector: u8) -> Option<Self> {
        if selector > GAIN_MUX_MSK {
            return None;
        }
        Some(Self::ALL[selector as usize])
    }

    /// The 3-bit selector written to GAIN_MUX.
    pub const fn selector(self) -> u8 {
        self as u8
    }

    /// Linear gain in V/V.
    pub const fn linear(self) -> u8 {
        1 << self.selector()
    }

    /// Gain in dB (20·log10 of the linear gain).
    pub fn db(self) -> f32 {
        20.0 * libm::log10f(self.linear() as f32)
    }
}

impl TryFrom<u8> for Gain {
    type Error = u8;

    /// Strict conversion: out-of-range selectors are returned as the error.
    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        Self::from_selector(selector).ok_or(selector)
    }
}

impl From<Gain> for u8 {
    fn from(gain: Gain) -> u8 {
        gain.selector()
    }
}
