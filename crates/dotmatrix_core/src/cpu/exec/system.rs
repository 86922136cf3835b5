use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        4
    }

    /// `HALT`: idle until an enabled interrupt is requested.
    pub(in crate::cpu) fn exec_halt(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.halted = true;
        4
    }

    /// `STOP` is a two-byte instruction; the low-power mode itself is not
    /// modelled, so it only skips its padding byte.
    pub(in crate::cpu) fn exec_stop(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.fetch8(bus);
        4
    }

    pub(in crate::cpu) fn exec_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        4
    }

    pub(in crate::cpu) fn exec_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ime_enable_pending = true;
        4
    }
}
