use crate::cpu::{Bus, Cpu, Reg16};

/// Pair selected by bits 4-5 of PUSH/POP; slot 3 is AF rather than SP.
const STACK_PAIRS: [Reg16; 4] = [Reg16::BC, Reg16::DE, Reg16::HL, Reg16::AF];

impl Cpu {
    /// `PUSH rr`
    pub(in crate::cpu) fn exec_push(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.regs.get16(STACK_PAIRS[((opcode >> 4) & 0x03) as usize]);
        self.push_u16(bus, value);
        16
    }

    /// `POP rr`. The low nibble of F does not exist in hardware, so `POP AF`
    /// drops it.
    pub(in crate::cpu) fn exec_pop(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let pair = STACK_PAIRS[((opcode >> 4) & 0x03) as usize];
        let mut value = self.pop_u16(bus);
        if pair == Reg16::AF {
            value &= 0xFFF0;
        }
        self.regs.set16(pair, value);
        12
    }
}
