//! Integration tests exercising the driver over a mocked SPI device.
//!
//! These wire the full stack together without hardware:
//!
//! ```text
//! AttributeAccess → Ada4250 → registers codec → SpiTransport → SpiDevice mock
//! ```

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    use crate::control::{AttrValue, AttributeAccess, RegAccess};
    use crate::driver::Ada4250;
    use crate::error::{ConfigError, InitError};
    use crate::gain::Gain;
    use crate::host::{Attach, ChannelInfo, DeviceDescriptor, Host, RegistrationId, CHANNELS, SUPPORTED};
    use crate::registers::{self as reg, BiasMode};
    use crate::transport::{RegisterConfig, SpiEndpoint, SpiTransport, REGISTER_CONFIG};

    /// Host that tracks which device names are currently registered.
    #[derive(Default)]
    struct RecordingHost {
        live: Vec<(RegistrationId, String)>,
        next_id: u32,
    }

    impl RecordingHost {
        fn has(&self, name: &str) -> bool {
            self.live.iter().any(|(_, n)| n == name)
        }
    }

    impl Host for RecordingHost {
        type Error = core::convert::Infallible;

        fn register(
            &mut self,
            device: &DeviceDescriptor<'_>,
        ) -> Result<RegistrationId, Self::Error> {
            let id = RegistrationId(self.next_id);
            self.next_id += 1;
            self.live.push((id, device.name.to_owned()));
            Ok(id)
        }

        fn unregister(&mut self, id: RegistrationId) {
            self.live.retain(|(i, _)| *i != id);
        }
    }

    const ATTACH: Attach<'static> = Attach {
        name: "ada4250",
        compatible: Some("adi,ada4250"),
    };

    /// Expectations for one register write.
    fn write_txn(addr: u8, value: u8) -> [SpiTransaction<u8>; 3] {
        [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![addr, value]),
            SpiTransaction::transaction_end(),
        ]
    }

    /// Expectations for one register read returning `value`.
    fn read_txn(addr: u8, value: u8) -> [SpiTransaction<u8>; 4] {
        [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![addr | reg::READ_FLAG]),
            SpiTransaction::read_vec(vec![value]),
            SpiTransaction::transaction_end(),
        ]
    }

    fn attach(spi: SpiMock<u8>, host: &mut RecordingHost) -> Ada4250<SpiTransport<SpiMock<u8>>> {
        match Ada4250::initialize(SpiEndpoint(spi), &ATTACH, &SUPPORTED, host) {
            Ok(amp) => amp,
            Err(e) => panic!("attach failed: {e:?}"),
        }
    }

    // ---------------------------------------------------------------
    // End-to-end: attach → set gain → read back → teardown
    // ---------------------------------------------------------------
    #[test]
    fn attach_set_gain_read_back_teardown() {
        let mut expectations = Vec::new();
        expectations.extend(write_txn(reg::GAIN_MUX, 0x03));
        expectations.extend(read_txn(reg::GAIN_MUX, 0x03));
        let spi = SpiMock::new(&expectations);

        let mut host = RecordingHost::default();
        let mut amp = attach(spi, &mut host);
        assert!(host.has("ada4250"));

        amp.set_hardware_gain(3).unwrap();
        assert_eq!(amp.get_hardware_gain().unwrap(), 3);

        let mut spi = amp.teardown(&mut host).release();
        assert!(!host.has("ada4250"));
        spi.done();
    }

    #[test]
    fn read_sets_flag_on_address_byte() {
        let expectations = read_txn(reg::CHIP_ID1, 0x42);
        let spi = SpiMock::new(&expectations);
        let mut host = RecordingHost::default();
        let mut amp = attach(spi, &mut host);

        assert_eq!(amp.raw_read(reg::CHIP_ID1).unwrap(), 0x42);

        amp.teardown(&mut host).release().done();
    }

    #[test]
    fn invalid_address_never_reaches_bus() {
        // No expectations: any SPI traffic fails the mock
        let spi: SpiMock<u8> = SpiMock::new(&[]);
        let mut host = RecordingHost::default();
        let mut amp = attach(spi, &mut host);

        assert!(amp.raw_read(0x1B).is_err());
        assert!(amp.raw_write(0x80, 0x01).is_err());
        assert!(amp.raw_access(0x1FF, RegAccess::Read).is_err());

        amp.teardown(&mut host).release().done();
    }

    #[test]
    fn attribute_surface_over_spi() {
        let mut expectations = Vec::new();
        expectations.extend(write_txn(reg::GAIN_MUX, 0x07));
        expectations.extend(read_txn(reg::GAIN_MUX, 0xF7));
        let spi = SpiMock::new(&expectations);
        let mut host = RecordingHost::default();
        let mut amp = attach(spi, &mut host);
        let channel = &CHANNELS[0];

        amp.write_attribute(channel, ChannelInfo::HardwareGain, 7, 0)
            .unwrap();
        // Offset is declared but generates no traffic
        amp.write_attribute(channel, ChannelInfo::Offset, 100, 0)
            .unwrap();
        assert_eq!(
            amp.read_attribute(channel, ChannelInfo::Offset).unwrap(),
            AttrValue::Unhandled
        );
        assert_eq!(
            amp.read_attribute(channel, ChannelInfo::HardwareGain)
                .unwrap(),
            AttrValue::Int(7)
        );

        amp.teardown(&mut host).release().done();
    }

    #[test]
    fn bias_update_is_read_modify_write() {
        let mut expectations = Vec::new();
        // Range 2 already programmed, bias disabled
        expectations.extend(read_txn(reg::SNSR_CAL_CNFG, 0b0000_1000));
        expectations.extend(write_txn(reg::SNSR_CAL_CNFG, 0b0000_1010));
        let spi = SpiMock::new(&expectations);
        let mut host = RecordingHost::default();
        let mut amp = attach(spi, &mut host);

        amp.set_bias_mode(BiasMode::Avdd).unwrap();
        assert_eq!(amp.bias_mode(), BiasMode::Avdd);

        amp.teardown(&mut host).release().done();
    }

    #[test]
    fn configuration_sequence() {
        let mut expectations = Vec::new();
        expectations.extend(write_txn(reg::RESET, 0x01));
        expectations.extend(write_txn(reg::REFBUF_EN, 0x01));
        expectations.extend(write_txn(reg::GAIN_MUX, Gain::G16.selector()));
        expectations.extend(write_txn(reg::SNSR_CAL_VAL, 0x80));
        expectations.extend(write_txn(reg::SNSR_CAL_CNFG, 0b0000_0101));
        let spi = SpiMock::new(&expectations);
        let mut host = RecordingHost::default();
        let mut amp = attach(spi, &mut host);

        amp.reset().unwrap();
        amp.set_reference_buffer(true).unwrap();
        amp.set_gain(Gain::G16).unwrap();
        amp.set_calibration_value(0x80).unwrap();
        amp.set_calibration_config(BiasMode::BandgapReference, 1)
            .unwrap();

        amp.teardown(&mut host).release().done();
    }

    #[test]
    fn bad_register_config_is_rejected() {
        let config = RegisterConfig {
            reg_bits: 16,
            ..REGISTER_CONFIG
        };
        let mut spi: SpiMock<u8> = SpiMock::new(&[]);
        let result = SpiTransport::new(spi.clone(), &config);
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedWordSize { reg_bits: 16, .. })
        ));
        spi.done();
    }

    #[test]
    fn unsupported_part_leaves_host_untouched() {
        let mut spi: SpiMock<u8> = SpiMock::new(&[]);
        let mut host = RecordingHost::default();
        let attach = Attach {
            name: "ada4254",
            compatible: None,
        };
        let result = Ada4250::initialize(SpiEndpoint(spi.clone()), &attach, &SUPPORTED, &mut host);
        assert!(matches!(result, Err(InitError::Unsupported)));
        assert!(host.live.is_empty());
        spi.done();
    }
}
