use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmulatorError {
    /// The fetched byte has no handler. Execution cannot continue.
    #[error("unsupported opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnsupportedOpcode { opcode: u8, pc: u16 },
    #[error("cartridge image is empty")]
    EmptyCartridge,
}

pub type Result<T> = std::result::Result<T, EmulatorError>;
