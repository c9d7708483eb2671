//! # ada4250
//!
//! A `no_std` driver for the Analog Devices ADA4250 single-channel
//! programmable-gain instrumentation amplifier, controlled over SPI.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Codec | [`registers`] | Register map, field masks, pure encode/decode |
//! | Presentation | [`gain`] | Gain selector ↔ V/V ↔ dB |
//! | Bus | [`transport`] | `RegisterTransport` trait, SPI framing (feature-gated) |
//! | Host | [`host`] / [`control`] | Channel table, match tables, `AttributeAccess` trait |
//! | Device | [`driver`] | [`Ada4250`] handle: attach, attribute ops, teardown |
//!
//! ## Quick start
//!
//! ```ignore
//! use ada4250::{Ada4250, Attach, Gain, SpiEndpoint, SUPPORTED};
//!
//! let attach = Attach { name: "ada4250", compatible: Some("adi,ada4250") };
//! let mut amp = Ada4250::initialize(SpiEndpoint(spi), &attach, &SUPPORTED, &mut host)?;
//!
//! amp.set_gain(Gain::G32)?;
//! amp.set_reference_buffer(true)?;
//! assert_eq!(amp.gain()?, Gain::G32);
//!
//! let spi = amp.teardown(&mut host).release();
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `spi` | yes | [`SpiTransport`] over `embedded-hal` 1.0 `SpiDevice` |
//! | `defmt` | no | Attach/raw-write logging and `defmt::Format` derives |
//!
//! ## Register framing
//!
//! - **Address:** 8-bit, `0x00..=0x1A` ([`registers::MAX_REGISTER`])
//! - **Value:** 8-bit
//! - **Read flag:** bit 7 of the address byte ([`registers::READ_FLAG`])

#![cfg_attr(not(test), no_std)]

pub mod registers;
pub mod gain;
pub mod error;
pub mod transport;
pub mod host;
pub mod control;
pub mod driver;

#[cfg(all(test, feature = "spi"))]
mod integration_tests;

pub use control::{AttrValue, AttributeAccess, RegAccess};
pub use driver::{Ada4250, ChipInfo};
pub use error::{ConfigError, Error, InitError};
pub use gain::Gain;
pub use host::{Attach, ChannelInfo, ChannelSpec, Host, MatchTable, Part, RegistrationId, SUPPORTED};
pub use registers::BiasMode;
pub use transport::{BindTransport, RegisterConfig, RegisterTransport, REGISTER_CONFIG};

#[cfg(feature = "spi")]
pub use transport::{SpiEndpoint, SpiTransport};
