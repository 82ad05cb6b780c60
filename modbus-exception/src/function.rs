use std::fmt::{Display, Formatter};

mod constants {
    pub(crate) const READ_COILS: u8 = 1;
    pub(crate) const READ_DISCRETE_INPUTS: u8 = 2;
    pub(crate) const READ_HOLDING_REGISTERS: u8 = 3;
    pub(crate) const READ_INPUT_REGISTERS: u8 = 4;
    pub(crate) const WRITE_SINGLE_COIL: u8 = 5;
    pub(crate) const WRITE_SINGLE_REGISTER: u8 = 6;
    pub(crate) const READ_EXCEPTION_STATUS: u8 = 7;
    pub(crate) const DIAGNOSTICS: u8 = 8;
    pub(crate) const WRITE_MULTIPLE_COILS: u8 = 15;
    pub(crate) const WRITE_MULTIPLE_REGISTERS: u8 = 16;
    pub(crate) const READ_FILE_RECORD: u8 = 20;
    pub(crate) const WRITE_FILE_RECORD: u8 = 21;
    pub(crate) const MASK_WRITE_REGISTER: u8 = 22;
    pub(crate) const READ_WRITE_MULTIPLE_REGISTERS: u8 = 23;
    pub(crate) const READ_FIFO_QUEUE: u8 = 24;
}

/// Public Modbus function codes that a server can reject with an exception response
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FunctionCode {
    /// Read Coils (function code 1)
    ReadCoils = constants::READ_COILS,
    /// Read Discrete Inputs (function code 2)
    ReadDiscreteInputs = constants::READ_DISCRETE_INPUTS,
    /// Read Holding Registers (function code 3)
    ReadHoldingRegisters = constants::READ_HOLDING_REGISTERS,
    /// Read Input Registers (function code 4)
    ReadInputRegisters = constants::READ_INPUT_REGISTERS,
    /// Write Single Coil (function code 5)
    WriteSingleCoil = constants::WRITE_SINGLE_COIL,
    /// Write Single Register (function code 6)
    WriteSingleRegister = constants::WRITE_SINGLE_REGISTER,
    /// Read Exception Status (function code 7)
    ReadExceptionStatus = constants::READ_EXCEPTION_STATUS,
    /// Diagnostics (function code 8)
    Diagnostics = constants::DIAGNOSTICS,
    /// Write Multiple Coils (function code 15)
    WriteMultipleCoils = constants::WRITE_MULTIPLE_COILS,
    /// Write Multiple Registers (function code 16)
    WriteMultipleRegisters = constants::WRITE_MULTIPLE_REGISTERS,
    /// Read File Record (function code 20)
    ReadFileRecord = constants::READ_FILE_RECORD,
    /// Write File Record (function code 21)
    WriteFileRecord = constants::WRITE_FILE_RECORD,
    /// Mask Write Register (function code 22)
    MaskWriteRegister = constants::MASK_WRITE_REGISTER,
    /// Read/Write Multiple Registers (function code 23)
    ReadWriteMultipleRegisters = constants::READ_WRITE_MULTIPLE_REGISTERS,
    /// Read FIFO Queue (function code 24)
    ReadFifoQueue = constants::READ_FIFO_QUEUE,
}

impl FunctionCode {
    /// Numeric value of the function code
    pub const fn get_value(self) -> u8 {
        self as u8
    }

    /// Value of the function code with the exception bit set, as it appears
    /// in the first byte of an exception response
    pub const fn as_error(self) -> u8 {
        self.get_value() | 0x80
    }

    /// Look up a function code by its numeric value
    pub fn get(value: u8) -> Option<Self> {
        match value {
            constants::READ_COILS => Some(FunctionCode::ReadCoils),
            constants::READ_DISCRETE_INPUTS => Some(FunctionCode::ReadDiscreteInputs),
            constants::READ_HOLDING_REGISTERS => Some(FunctionCode::ReadHoldingRegisters),
            constants::READ_INPUT_REGISTERS => Some(FunctionCode::ReadInputRegisters),
            constants::WRITE_SINGLE_COIL => Some(FunctionCode::WriteSingleCoil),
            constants::WRITE_SINGLE_REGISTER => Some(FunctionCode::WriteSingleRegister),
            constants::READ_EXCEPTION_STATUS => Some(FunctionCode::ReadExceptionStatus),
            constants::DIAGNOSTICS => Some(FunctionCode::Diagnostics),
            constants::WRITE_MULTIPLE_COILS => Some(FunctionCode::WriteMultipleCoils),
            constants::WRITE_MULTIPLE_REGISTERS => Some(FunctionCode::WriteMultipleRegisters),
            constants::READ_FILE_RECORD => Some(FunctionCode::ReadFileRecord),
            constants::WRITE_FILE_RECORD => Some(FunctionCode::WriteFileRecord),
            constants::MASK_WRITE_REGISTER => Some(FunctionCode::MaskWriteRegister),
            constants::READ_WRITE_MULTIPLE_REGISTERS => {
                Some(FunctionCode::ReadWriteMultipleRegisters)
            }
            constants::READ_FIFO_QUEUE => Some(FunctionCode::ReadFifoQueue),
            _ => None,
        }
    }

    /// Describe an op code extracted from an exception response
    ///
    /// Total over any integer: codes outside the set of public function codes
    /// (including negative values produced by payloads that are not actually
    /// exception responses) yield a fallback description rather than an error.
    pub fn describe(code: i32) -> String {
        match u8::try_from(code).ok().and_then(FunctionCode::get) {
            Some(function) => function.to_string(),
            None => format!("Unknown Opcode: {code}"),
        }
    }
}

impl Display for FunctionCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            FunctionCode::ReadCoils => write!(f, "Read Coils ({})", self.get_value()),
            FunctionCode::ReadDiscreteInputs => {
                write!(f, "Read Discrete Inputs ({})", self.get_value())
            }
            FunctionCode::ReadHoldingRegisters => {
                write!(f, "Read Holding Registers ({})", self.get_value())
            }
            FunctionCode::ReadInputRegisters => {
                write!(f, "Read Input Registers ({})", self.get_value())
            }
            FunctionCode::WriteSingleCoil => write!(f, "Write Single Coil ({})", self.get_value()),
            FunctionCode::WriteSingleRegister => {
                write!(f, "Write Single Register ({})", self.get_value())
            }
            FunctionCode::ReadExceptionStatus => {
                write!(f, "Read Exception Status ({})", self.get_value())
            }
            FunctionCode::Diagnostics => write!(f, "Diagnostics ({})", self.get_value()),
            FunctionCode::WriteMultipleCoils => {
                write!(f, "Write Multiple Coils ({})", self.get_value())
            }
            FunctionCode::WriteMultipleRegisters => {
                write!(f, "Write Multiple Registers ({})", self.get_value())
            }
            FunctionCode::ReadFileRecord => write!(f, "Read File Record ({})", self.get_value()),
            FunctionCode::WriteFileRecord => write!(f, "Write File Record ({})", self.get_value()),
            FunctionCode::MaskWriteRegister => {
                write!(f, "Mask Write Register ({})", self.get_value())
            }
            FunctionCode::ReadWriteMultipleRegisters => {
                write!(f, "Read/Write Multiple Registers ({})", self.get_value())
            }
            FunctionCode::ReadFifoQueue => write!(f, "Read FIFO ({})", self.get_value()),
        }
    }
}
