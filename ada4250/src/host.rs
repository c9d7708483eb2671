//! Host framework surface: registration, channel table and device matching.
//!
//! The host enumerates the bus, picks a driver through a [`MatchTable`] and
//! then routes attribute requests to the device through
//! [`AttributeAccess`](crate::control::AttributeAccess). This module declares
//! what the driver hands the host; it does not implement a host.

/// Supported parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Part {
    Ada4250,
}

// ── Channels ───────────────────────────────────────────────────────────────

/// Channel measurement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelType {
    Voltage,
}

/// Attribute exposed on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelInfo {
    /// Programmable gain selector.
    HardwareGain,
    /// Output offset. Declared only; reads and writes do nothing.
    Offset,
}

/// Static description of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSpec {
    pub kind: ChannelType,
    pub output: bool,
    pub indexed: bool,
    pub channel: u32,
    /// Attributes carried separately by this channel.
    pub info: &'static [ChannelInfo],
}

impl ChannelSpec {
    /// Whether this channel exposes `info`.
    pub fn has(&self, info: ChannelInfo) -> bool {
        self.info.contains(&info)
    }
}

const OUTPUT_INFO: &[ChannelInfo] = &[ChannelInfo::HardwareGain, ChannelInfo::Offset];

const fn output_channel(channel: u32) -> ChannelSpec {
    ChannelSpec {
        kind: ChannelType::Voltage,
        output: true,
        indexed: true,
        channel,
        info: OUTPUT_INFO,
    }
}

/// ADA4250 channel table: one indexed output voltage channel.
pub static CHANNELS: [ChannelSpec; 1] = [output_channel(0)];

// ── Registration ───────────────────────────────────────────────────────────

/// What the driver registers with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDescriptor<'a> {
    pub name: &'a str,
    pub channels: &'static [ChannelSpec],
}

/// Token identifying a registration, handed back on unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegistrationId(pub u32);

/// Host framework registry.
pub trait Host {
    /// Error returned when registration is refused.
    type Error;

    /// Publish a device's channel surface.
    fn register(&mut self, device: &DeviceDescriptor<'_>) -> Result<RegistrationId, Self::Error>;

    /// Withdraw a previously published device. Unknown ids are ignored.
    fn unregister(&mut self, id: RegistrationId);
}

// ── Device matching ────────────────────────────────────────────────────────

/// Bus-level device name entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId {
    pub name: &'static str,
    pub part: Part,
}

/// Board-description compatible string entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compatible {
    pub compatible: &'static str,
    pub part: Part,
}

/// Immutable lookup from identifiers to supported parts.
#[derive(Debug, Clone, Copy)]
pub struct MatchTable {
    ids: &'static [DeviceId],
    compatibles: &'static [Compatible],
}

impl MatchTable {
    pub const fn new(ids: &'static [DeviceId], compatibles: &'static [Compatible]) -> Self {
        Self { ids, compatibles }
    }

    pub fn by_id(&self, name: &str) -> Option<Part> {
        self.ids.iter().find(|e| e.name == name).map(|e| e.part)
    }

    pub fn by_compatible(&self, compatible: &str) -> Option<Part> {
        self.compatibles
            .iter()
            .find(|e| e.compatible == compatible)
            .map(|e| e.part)
    }

    /// Resolve an attach request: compatible string first, then name.
    pub fn resolve(&self, attach: &Attach<'_>) -> Option<Part> {
        attach
            .compatible
            .and_then(|c| self.by_compatible(c))
            .or_else(|| self.by_id(attach.name))
    }
}

/// Tables for every part this driver handles.
pub static SUPPORTED: MatchTable = MatchTable::new(
    &[DeviceId {
        name: "ada4250",
        part: Part::Ada4250,
    }],
    &[Compatible {
        compatible: "adi,ada4250",
        part: Part::Ada4250,
    }],
);

/// Identity of a device being attached, as supplied by bus enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attach<'a> {
    /// Node / device name; also the name registered with the host.
    pub name: &'a str,
    /// Board-description compatible string, if any.
    pub compatible: Option<&'a str>,
}
