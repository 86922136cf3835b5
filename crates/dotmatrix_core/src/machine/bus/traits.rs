use crate::cpu::Bus;

use super::AddressSpace;

impl Bus for AddressSpace {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value)
    }

    /// Timer first, then the PPU, so requests from both are visible to the
    /// dispatch check that follows.
    fn tick(&mut self, cycles: u32) {
        self.update_timers(cycles);
        self.update_graphics(cycles);
    }
}
