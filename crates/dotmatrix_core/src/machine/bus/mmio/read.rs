use super::super::super::{RAM_BANK_SIZE, ROM_BANK_SIZE};
use super::super::AddressSpace;

impl AddressSpace {
    pub(super) fn read_mmio_impl(&self, addr: u16) -> u8 {
        match addr {
            // Switchable ROM bank.
            0x4000..=0x7FFF => self.read_banked_rom(addr),

            // External cartridge RAM, selected bank.
            0xA000..=0xBFFF => {
                let index =
                    (addr - 0xA000) as usize + self.banks.ram_bank as usize * RAM_BANK_SIZE;
                self.ram_banks[index]
            }

            // Joypad input (P1).
            0xFF00 => self.read_joypad(),

            _ => self.memory[addr as usize],
        }
    }

    fn read_banked_rom(&self, addr: u16) -> u8 {
        let index = (addr - 0x4000) as usize + self.banks.rom_bank as usize * ROM_BANK_SIZE;
        match self.cartridge_rom.get(index) {
            Some(&byte) => byte,
            None => {
                log::warn!(
                    "ROM read past end of image: bank {} addr 0x{addr:04X} (image {} bytes)",
                    self.banks.rom_bank,
                    self.cartridge_rom.len()
                );
                0xFF
            }
        }
    }
}
