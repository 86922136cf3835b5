mod bus;
mod cartridge;
mod console;

pub use bus::{AddressSpace, Interrupt, LcdControl, LcdStatus};
pub use cartridge::{BankController, CartridgeHeader};
pub use console::{Console, ConsoleConfig};

/// Total addressable memory (64 KiB).
///
/// Banked regions (switchable ROM and external RAM) are served from their
/// own storage; everything else lives in this flat array.
const MEMORY_SIZE: usize = 0x10000;

/// Size of one switchable ROM bank.
const ROM_BANK_SIZE: usize = 0x4000;

/// Size of one external RAM bank.
const RAM_BANK_SIZE: usize = 0x2000;

/// External cartridge RAM: four 8 KiB banks.
pub const RAM_BANKS_SIZE: usize = 4 * RAM_BANK_SIZE;

#[cfg(test)]
mod tests;
