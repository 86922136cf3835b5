use super::BankController;

/// Banking registers shared by MBC1 and MBC2.
///
/// `rom_bank` selects what appears at 0x4000..0x7FFF and is never 0: any
/// write that would select bank 0 selects bank 1 instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(in super::super) struct BankState {
    pub(in super::super) controller: BankController,
    pub(in super::super) rom_bank: u8,
    pub(in super::super) ram_bank: u8,
    pub(in super::super) ram_enabled: bool,
    /// MBC1 mode bit: true while 0x4000..0x5FFF writes select the high ROM
    /// bank bits, false while they select the RAM bank.
    pub(in super::super) rom_banking: bool,
}

impl BankState {
    pub(in super::super) fn new(controller: BankController) -> Self {
        Self {
            controller,
            rom_bank: 1,
            ram_bank: 0,
            ram_enabled: false,
            rom_banking: true,
        }
    }

    /// Interpret a CPU write into 0x0000..0x7FFF.
    pub(in super::super) fn write(&mut self, addr: u16, value: u8) {
        if self.controller == BankController::None {
            return;
        }

        match addr {
            0x0000..=0x1FFF => self.write_ram_enable(addr, value),
            0x2000..=0x3FFF => self.write_rom_bank_low(value),
            0x4000..=0x5FFF => {
                if self.controller == BankController::Mbc1 {
                    if self.rom_banking {
                        self.write_rom_bank_high(value);
                    } else {
                        self.ram_bank = value & 0x03;
                        log::debug!("MBC1: RAM bank -> {}", self.ram_bank);
                    }
                }
            }
            _ => {
                if self.controller == BankController::Mbc1 {
                    self.rom_banking = (value & 0x01) == 0;
                    if self.rom_banking {
                        self.ram_bank = 0;
                    }
                }
            }
        }
    }

    fn write_ram_enable(&mut self, addr: u16, value: u8) {
        if self.controller == BankController::Mbc2 && (addr & 0x10) != 0 {
            return;
        }
        match value & 0x0F {
            0x0A => self.ram_enabled = true,
            0x00 => self.ram_enabled = false,
            _ => {}
        }
    }

    fn write_rom_bank_low(&mut self, value: u8) {
        if self.controller == BankController::Mbc2 {
            self.rom_bank = value & 0x0F;
        } else {
            self.rom_bank = (self.rom_bank & 0xE0) | (value & 0x1F);
        }
        self.coerce_rom_bank();
        log::debug!("{:?}: ROM bank -> {}", self.controller, self.rom_bank);
    }

    fn write_rom_bank_high(&mut self, value: u8) {
        self.rom_bank = (self.rom_bank & 0x1F) | (value & 0xE0);
        self.coerce_rom_bank();
        log::debug!("MBC1: ROM bank -> {}", self.rom_bank);
    }

    #[inline]
    fn coerce_rom_bank(&mut self) {
        if self.rom_bank == 0 {
            self.rom_bank = 1;
        }
    }
}
