use super::super::super::RAM_BANK_SIZE;
use super::super::AddressSpace;

impl AddressSpace {
    pub(super) fn write_mmio_impl(&mut self, addr: u16, value: u8) {
        match addr {
            // Cartridge ROM area: writes only drive the bank controller and
            // never reach the flat array.
            0x0000..=0x7FFF => self.banks.write(addr, value),

            // External cartridge RAM, dropped while disabled.
            0xA000..=0xBFFF => {
                if self.banks.ram_enabled {
                    let index =
                        (addr - 0xA000) as usize + self.banks.ram_bank as usize * RAM_BANK_SIZE;
                    self.ram_banks[index] = value;
                }
            }

            // Echo RAM: store at the address and at the work RAM it mirrors.
            0xE000..=0xFDFF => {
                self.memory[addr as usize] = value;
                self.write_mmio_impl(addr - 0x2000, value);
            }

            // Unusable area.
            0xFEA0..=0xFEFE => {}

            // DIV: any write resets it.
            0xFF04 => self.memory[0xFF04] = 0,

            0xFF07 => self.write_timer_control(value),

            // LY is read-only to the program; writes reset it.
            0xFF44 => self.memory[0xFF44] = 0,

            // OAM DMA.
            0xFF46 => self.do_dma_transfer(value),

            // Boot ROM disable.
            0xFF50 => {
                self.memory[0xFF50] = value;
                if value != 0 && self.bootstrap_mapped() {
                    self.unmap_bootstrap();
                }
            }

            _ => self.memory[addr as usize] = value,
        }
    }
}
