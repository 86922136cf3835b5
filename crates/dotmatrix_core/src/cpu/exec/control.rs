use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// `JP a16` and `JP cc,a16`
    pub(in crate::cpu) fn exec_jp(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        if opcode == 0xC3 || self.condition(opcode) {
            self.regs.pc = addr;
            16
        } else {
            12
        }
    }

    /// `JP (HL)`
    pub(in crate::cpu) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.regs.hl();
        4
    }

    /// `JR r8` and `JR cc,r8`. The displacement is relative to the address
    /// following the operand.
    pub(in crate::cpu) fn exec_jr(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let offset = self.fetch8(bus) as i8;
        if opcode == 0x18 || self.condition(opcode) {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            12
        } else {
            8
        }
    }

    /// `CALL a16` and `CALL cc,a16`
    pub(in crate::cpu) fn exec_call(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        if opcode == 0xCD || self.condition(opcode) {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
            24
        } else {
            12
        }
    }

    /// `RET`
    pub(in crate::cpu) fn exec_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        16
    }

    /// `RET cc`
    pub(in crate::cpu) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        if self.condition(opcode) {
            self.regs.pc = self.pop_u16(bus);
            20
        } else {
            8
        }
    }

    /// `RETI`: return and re-enable interrupts immediately.
    pub(in crate::cpu) fn exec_reti(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        16
    }

    /// `RST n`: call to the fixed vector encoded in bits 3-5.
    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
        16
    }
}
