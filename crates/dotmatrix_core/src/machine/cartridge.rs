mod header;
mod mbc;

pub use header::CartridgeHeader;
pub(super) use mbc::BankState;

/// Bank controller kind, fixed at load time from header byte 0x147.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BankController {
    /// 32 KiB ROM without banking; all control writes are ignored.
    #[default]
    None,
    Mbc1,
    Mbc2,
}

impl BankController {
    /// Decode the cartridge kind byte. Unknown kinds run without banking.
    pub fn from_kind(kind: u8) -> Self {
        match kind {
            0x00 => BankController::None,
            0x01..=0x03 => BankController::Mbc1,
            0x05 | 0x06 => BankController::Mbc2,
            other => {
                log::warn!("Cartridge kind 0x{other:02X} not supported, running without banking");
                BankController::None
            }
        }
    }
}
