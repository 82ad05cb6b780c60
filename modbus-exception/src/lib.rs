//! Decoding of [Modbus](http://modbus.org/) exception responses into typed,
//! human-describable error values.
//!
//! # Features
//!
//! * Closed taxonomy of the nine exception codes defined in the specification
//! * Panic-free parsing
//! * Total op-code descriptions with a deterministic fallback for unknown codes
//! * No I/O and no shared mutable state
//!
//! The transport layer (framing, CRC, client/server loop) is an external
//! collaborator: this crate only consumes a payload that has already been
//! delimited and only produces values.
//!
//! # Example
//!
//! ```
//! use modbus_exception::{ModbusException, ParseError};
//!
//! // response to a Read Holding Registers request rejecting the address
//! let exception = ModbusException::parse(&[0x83, 0x02])?;
//!
//! assert_eq!(exception.error_code(), 2);
//! assert_eq!(exception.op_code_description(), "Read Holding Registers (3)");
//! # Ok::<(), ParseError>(())
//! ```

mod error;
mod exception;
mod frame;
mod function;

pub use crate::error::ParseError;
pub use crate::exception::ModbusException;
pub use crate::frame::ExceptionFrame;
pub use crate::function::FunctionCode;
