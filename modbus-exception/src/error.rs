/// Errors that occur while decoding an exception response payload
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    /// Payload is too short to contain a function code and an error code
    MalformedPayload,
    /// The error code is not one of the values defined in the Modbus specification
    UnrecognizedErrorCode(u8),
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            ParseError::MalformedPayload => {
                f.write_str("payload is too short to contain an exception response")
            }
            ParseError::UnrecognizedErrorCode(code) => {
                write!(f, "received unrecognized error code: {code}")
            }
        }
    }
}

impl From<scursor::ReadError> for ParseError {
    fn from(_: scursor::ReadError) -> Self {
        ParseError::MalformedPayload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_the_offending_error_code() {
        assert_eq!(
            ParseError::UnrecognizedErrorCode(7).to_string(),
            "received unrecognized error code: 7"
        );
    }

    #[test]
    fn cursor_underflow_converts_to_malformed_payload() {
        let mut cursor = scursor::ReadCursor::new(&[]);
        let err: ParseError = cursor.read_u8().unwrap_err().into();
        assert_eq!(err, ParseError::MalformedPayload);
    }
}
