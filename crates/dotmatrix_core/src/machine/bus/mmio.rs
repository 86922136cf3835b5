mod read;
mod write;

use super::AddressSpace;

impl AddressSpace {
    /// Read a byte as the CPU sees it.
    ///
    /// Takes `&self`: no read in this address space has side effects, so the
    /// same path serves debugger peeks.
    pub fn read(&self, addr: u16) -> u8 {
        self.read_mmio_impl(addr)
    }

    /// Write a byte as the CPU does, with banking, mirroring and register
    /// side effects applied.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.write_mmio_impl(addr, value)
    }
}
