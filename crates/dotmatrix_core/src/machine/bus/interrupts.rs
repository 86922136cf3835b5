use crate::cpu::IF_ADDR;

use super::AddressSpace;

/// Interrupt sources by request bit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl AddressSpace {
    /// Set the request bit for `interrupt` in IF.
    #[inline]
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.memory[IF_ADDR as usize] |= 1 << interrupt as u8;
    }
}
