use crate::error::ParseError;
use crate::frame::ExceptionFrame;

pub(crate) mod constants {
    pub(crate) const ILLEGAL_FUNCTION: u8 = 0x01;
    pub(crate) const ILLEGAL_DATA_ADDRESS: u8 = 0x02;
    pub(crate) const ILLEGAL_DATA_VALUE: u8 = 0x03;
    pub(crate) const SERVER_DEVICE_FAILURE: u8 = 0x04;
    pub(crate) const ACKNOWLEDGE: u8 = 0x05;
    pub(crate) const SERVER_DEVICE_BUSY: u8 = 0x06;
    pub(crate) const MEMORY_PARITY: u8 = 0x08;
    pub(crate) const GATEWAY_PATH_UNAVAILABLE: u8 = 0x0A;
    pub(crate) const GATEWAY_TARGET_DEVICE_FAILED_TO_RESPOND: u8 = 0x0B;
}

/// Exception responses defined in the Modbus specification, decoded from a
/// raw payload
///
/// Each variant owns the frame it was decoded from, so the failing function
/// remains identifiable after the response buffer is gone. Error codes 7 and
/// 9 are reserved gaps in the specification and have no variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum ModbusException {
    /// The function code received in the request is not an allowable action for the server
    IllegalFunction(ExceptionFrame),
    /// The data address received in the request is not an allowable address for the server
    IllegalDataAddress(ExceptionFrame),
    /// The value contained in the request data field is not an allowable value for the server
    IllegalDataValue(ExceptionFrame),
    /// An unrecoverable error occurred while the server was attempting to perform the request
    ServerDeviceFailure(ExceptionFrame),
    /// The server has accepted the request and is processing it, but a long
    /// duration of time will be required to do so
    Acknowledge(ExceptionFrame),
    /// The server is engaged in processing a long-duration program command
    ServerDeviceBusy(ExceptionFrame),
    /// The server attempted to read a record file, but detected a parity error in memory
    MemoryParity(ExceptionFrame),
    /// The gateway was unable to allocate an internal communication path,
    /// usually because it is misconfigured or overloaded
    GatewayPathUnavailable(ExceptionFrame),
    /// No response was obtained from the target device behind the gateway
    GatewayTargetDeviceFailedToRespond(ExceptionFrame),
}

impl ModbusException {
    /// Decode an exception response payload into its typed representation
    ///
    /// Fails with [`ParseError::MalformedPayload`] if the payload is shorter
    /// than two bytes and with [`ParseError::UnrecognizedErrorCode`] if the
    /// error code is not defined in the specification. Decoded exceptions and
    /// decode failures are logged at WARN level.
    pub fn parse(payload: &[u8]) -> Result<Self, ParseError> {
        match Self::parse_impl(payload) {
            Ok(exception) => {
                tracing::warn!(
                    "PDU RX - Modbus exception {:#04X} ({}) in response to {}",
                    exception.error_code(),
                    exception,
                    exception.op_code_description()
                );
                Ok(exception)
            }
            Err(err) => {
                tracing::warn!("PDU RX - {err}");
                Err(err)
            }
        }
    }

    fn parse_impl(payload: &[u8]) -> Result<Self, ParseError> {
        let frame = ExceptionFrame::parse(payload)?;
        match frame.error_code() {
            constants::ILLEGAL_FUNCTION => Ok(Self::IllegalFunction(frame)),
            constants::ILLEGAL_DATA_ADDRESS => Ok(Self::IllegalDataAddress(frame)),
            constants::ILLEGAL_DATA_VALUE => Ok(Self::IllegalDataValue(frame)),
            constants::SERVER_DEVICE_FAILURE => Ok(Self::ServerDeviceFailure(frame)),
            constants::ACKNOWLEDGE => Ok(Self::Acknowledge(frame)),
            constants::SERVER_DEVICE_BUSY => Ok(Self::ServerDeviceBusy(frame)),
            constants::MEMORY_PARITY => Ok(Self::MemoryParity(frame)),
            constants::GATEWAY_PATH_UNAVAILABLE => Ok(Self::GatewayPathUnavailable(frame)),
            constants::GATEWAY_TARGET_DEVICE_FAILED_TO_RESPOND => {
                Ok(Self::GatewayTargetDeviceFailedToRespond(frame))
            }
            code => Err(ParseError::UnrecognizedErrorCode(code)),
        }
    }

    /// Numeric Modbus error code identifying this exception
    pub fn error_code(&self) -> u8 {
        match self {
            Self::IllegalFunction(_) => constants::ILLEGAL_FUNCTION,
            Self::IllegalDataAddress(_) => constants::ILLEGAL_DATA_ADDRESS,
            Self::IllegalDataValue(_) => constants::ILLEGAL_DATA_VALUE,
            Self::ServerDeviceFailure(_) => constants::SERVER_DEVICE_FAILURE,
            Self::Acknowledge(_) => constants::ACKNOWLEDGE,
            Self::ServerDeviceBusy(_) => constants::SERVER_DEVICE_BUSY,
            Self::MemoryParity(_) => constants::MEMORY_PARITY,
            Self::GatewayPathUnavailable(_) => constants::GATEWAY_PATH_UNAVAILABLE,
            Self::GatewayTargetDeviceFailedToRespond(_) => {
                constants::GATEWAY_TARGET_DEVICE_FAILED_TO_RESPOND
            }
        }
    }

    /// Fixed description of the error condition
    pub fn message(&self) -> &'static str {
        match self {
            Self::IllegalFunction(_) => {
                "Function code is not an allowable action for the server."
            }
            Self::IllegalDataAddress(_) => {
                "The data address received in the request is not an allowable address for the server."
            }
            Self::IllegalDataValue(_) => {
                "The value contained in the request data field is not an allowable value for the server."
            }
            Self::ServerDeviceFailure(_) => "An unrecoverable error occurred.",
            Self::Acknowledge(_) => {
                "The server has accepted the request and is processing it, but a long duration of time will be required to do so."
            }
            Self::ServerDeviceBusy(_) => {
                "The server is engaged in a long-duration program command."
            }
            Self::MemoryParity(_) => {
                "The server attempted to read record file, but detected a parity error in memory."
            }
            Self::GatewayPathUnavailable(_) => {
                "The gateway is probably misconfigured or overloaded."
            }
            Self::GatewayTargetDeviceFailedToRespond(_) => {
                "Did not get a response from the target device."
            }
        }
    }

    /// The decoded frame carrying the originating payload
    pub fn frame(&self) -> &ExceptionFrame {
        match self {
            Self::IllegalFunction(frame)
            | Self::IllegalDataAddress(frame)
            | Self::IllegalDataValue(frame)
            | Self::ServerDeviceFailure(frame)
            | Self::Acknowledge(frame)
            | Self::ServerDeviceBusy(frame)
            | Self::MemoryParity(frame)
            | Self::GatewayPathUnavailable(frame)
            | Self::GatewayTargetDeviceFailedToRespond(frame) => frame,
        }
    }

    /// Function code as it appeared on the wire, exception bit included
    pub fn function_code(&self) -> u8 {
        self.frame().function_code()
    }

    /// Op code of the function that failed
    pub fn op_code(&self) -> i32 {
        self.frame().op_code()
    }

    /// Human-readable description of the function that failed
    pub fn op_code_description(&self) -> String {
        self.frame().op_code_description()
    }
}

impl std::error::Error for ModbusException {}

impl std::fmt::Display for ModbusException {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(payload: &[u8]) -> ModbusException {
        ModbusException::parse(payload).unwrap()
    }

    #[test]
    fn parses_every_defined_error_code() {
        let cases: &[(u8, &str)] = &[
            (0x01, "Function code is not an allowable action for the server."),
            (
                0x02,
                "The data address received in the request is not an allowable address for the server.",
            ),
            (
                0x03,
                "The value contained in the request data field is not an allowable value for the server.",
            ),
            (0x04, "An unrecoverable error occurred."),
            (
                0x05,
                "The server has accepted the request and is processing it, but a long duration of time will be required to do so.",
            ),
            (0x06, "The server is engaged in a long-duration program command."),
            (
                0x08,
                "The server attempted to read record file, but detected a parity error in memory.",
            ),
            (0x0A, "The gateway is probably misconfigured or overloaded."),
            (0x0B, "Did not get a response from the target device."),
        ];

        for (code, message) in cases {
            let exception = parse(&[0x83, *code]);
            assert_eq!(exception.error_code(), *code);
            assert_eq!(exception.message(), *message);
            assert_eq!(exception.to_string(), *message);
        }
    }

    #[test]
    fn decodes_the_same_exception_for_any_failing_function() {
        for op in [1u8, 2, 3, 4, 5, 6, 7, 8, 15, 16, 20, 21, 22, 23, 24] {
            let exception = parse(&[0x80 + op, 0x06]);
            assert!(matches!(exception, ModbusException::ServerDeviceBusy(_)));
            assert_eq!(exception.error_code(), 6);
            assert_eq!(exception.op_code(), i32::from(op));
        }
    }

    #[test]
    fn decodes_illegal_data_address_for_read_holding_registers() {
        let exception = parse(&[0x83, 0x02]);
        assert!(matches!(exception, ModbusException::IllegalDataAddress(_)));
        assert_eq!(exception.error_code(), 2);
        assert_eq!(exception.op_code(), 3);
        assert_eq!(exception.op_code_description(), "Read Holding Registers (3)");
    }

    #[test]
    fn decodes_server_device_busy_for_write_multiple_coils() {
        let exception = parse(&[0x8F, 0x06]);
        assert!(matches!(exception, ModbusException::ServerDeviceBusy(_)));
        assert_eq!(exception.op_code_description(), "Write Multiple Coils (15)");
    }

    #[test]
    fn parse_fails_for_reserved_error_codes() {
        assert_eq!(
            ModbusException::parse(&[0x81, 0x07]),
            Err(ParseError::UnrecognizedErrorCode(7))
        );
        assert_eq!(
            ModbusException::parse(&[0x81, 0x09]),
            Err(ParseError::UnrecognizedErrorCode(9))
        );
    }

    #[test]
    fn parse_fails_for_undefined_error_codes() {
        for code in [0x00u8, 0x0C, 0x20, 0xFF] {
            assert_eq!(
                ModbusException::parse(&[0x83, code]),
                Err(ParseError::UnrecognizedErrorCode(code))
            );
        }
    }

    #[test]
    fn parse_fails_for_short_payloads() {
        assert_eq!(
            ModbusException::parse(&[]),
            Err(ParseError::MalformedPayload)
        );
        assert_eq!(
            ModbusException::parse(&[0x83]),
            Err(ParseError::MalformedPayload)
        );
    }

    #[test]
    fn parsing_the_same_payload_twice_yields_equal_values() {
        let payload = [0x83, 0x02, 0xAB];
        let first = parse(&payload);
        let second = parse(&payload);
        assert_eq!(first, second);
        assert_eq!(first.error_code(), second.error_code());
        assert_eq!(first.message(), second.message());
        assert_eq!(first.op_code_description(), second.op_code_description());
    }

    #[test]
    fn exposes_the_originating_payload() {
        let exception = parse(&[0x94, 0x08, 0x01, 0x02]);
        assert!(matches!(exception, ModbusException::MemoryParity(_)));
        assert_eq!(exception.function_code(), 0x94);
        assert_eq!(exception.frame().payload(), &[0x94, 0x08, 0x01, 0x02]);
        assert_eq!(exception.op_code_description(), "Read File Record (20)");
    }
}
