use scursor::ReadCursor;

use crate::error::ParseError;
use crate::function::FunctionCode;

/// Decoded view of a single Modbus exception response payload
///
/// Owns the raw bytes handed over by the transport layer and derives the
/// function and op code information from them on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct ExceptionFrame {
    // invariant: at least the function-code and error-code bytes are present
    payload: Vec<u8>,
}

impl ExceptionFrame {
    /// Parse a frame from a raw exception response payload
    ///
    /// Fails with [`ParseError::MalformedPayload`] if the payload does not
    /// contain the function-code and error-code bytes.
    pub fn parse(payload: &[u8]) -> Result<Self, ParseError> {
        let mut cursor = ReadCursor::new(payload);
        cursor.read_u8()?; // function code with the exception bit set
        cursor.read_u8()?; // error code
        Ok(Self {
            payload: payload.to_vec(),
        })
    }

    /// Function code exactly as it appeared on the wire, exception bit included
    pub fn function_code(&self) -> u8 {
        self.payload[0]
    }

    /// Error code byte of the response
    pub fn error_code(&self) -> u8 {
        self.payload[1]
    }

    /// Op code of the function that failed: the function code with the
    /// exception bit cleared
    ///
    /// Signed so that a payload which is not actually an exception response
    /// yields an out-of-domain value instead of wrapping around.
    pub fn op_code(&self) -> i32 {
        i32::from(self.function_code()) - 0x80
    }

    /// Human-readable description of the function that failed
    pub fn op_code_description(&self) -> String {
        FunctionCode::describe(self.op_code())
    }

    /// Raw bytes of the response payload
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
