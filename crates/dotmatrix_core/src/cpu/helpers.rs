use super::{Bus, Cpu, Flag, Reg8};

/// Register order used by the opcode encoding: 0=B, 1=C, 2=D, 3=E, 4=H,
/// 5=L, 6=(HL), 7=A. `None` marks the memory operand addressed through HL.
const OPERAND_REGS: [Option<Reg8>; 8] = [
    Some(Reg8::B),
    Some(Reg8::C),
    Some(Reg8::D),
    Some(Reg8::E),
    Some(Reg8::H),
    Some(Reg8::L),
    None,
    Some(Reg8::A),
];

/// Index of the `(HL)` slot in the register encoding.
pub(super) const HL_INDIRECT: u8 = 6;

impl Cpu {
    /// Read an 8-bit register or `(HL)` by its 3-bit encoding.
    #[inline]
    pub(super) fn read_operand(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match OPERAND_REGS[(index & 0x07) as usize] {
            Some(reg) => self.regs.get8(reg),
            None => bus.read8(self.regs.hl()),
        }
    }

    /// Write an 8-bit register or `(HL)` by its 3-bit encoding.
    #[inline]
    pub(super) fn write_operand(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match OPERAND_REGS[(index & 0x07) as usize] {
            Some(reg) => self.regs.set8(reg, value),
            None => bus.write8(self.regs.hl(), value),
        }
    }

    #[inline]
    pub(super) fn fetch8(&mut self, bus: &mut dyn Bus) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.fetch8(bus) as u16;
        let hi = self.fetch8(bus) as u16;
        (hi << 8) | lo
    }

    #[inline]
    pub(super) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        let lo = (value & 0xFF) as u8;
        let hi = (value >> 8) as u8;
        // Stack grows downward: memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = bus.read8(self.regs.sp) as u16;
        let hi = bus.read8(self.regs.sp.wrapping_add(1)) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        (hi << 8) | lo
    }

    /// Evaluate the condition encoded in bits 3-4 of a conditional
    /// jump/call/return opcode: NZ, Z, NC, C.
    #[inline]
    pub(super) fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            _ => self.get_flag(Flag::C),
        }
    }
}
