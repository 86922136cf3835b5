use crate::cpu::helpers::HL_INDIRECT;
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    fn alu_dispatch(&mut self, operation: u8, value: u8) {
        match operation & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// 8-bit ALU operations on A with a register or `(HL)` operand
    /// (0x80-0xBF): ADD/ADC/SUB/SBC/AND/XOR/OR/CP.
    pub(in crate::cpu) fn exec_alu_reg(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let src = opcode & 0x07;
        let value = self.read_operand(bus, src);
        self.alu_dispatch(opcode >> 3, value);

        if src == HL_INDIRECT { 8 } else { 4 }
    }

    /// The same eight operations with an immediate operand.
    pub(in crate::cpu) fn exec_alu_imm(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.fetch8(bus);
        self.alu_dispatch(opcode >> 3, value);
        8
    }

    /// `INC r` / `INC (HL)`
    pub(in crate::cpu) fn exec_inc8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let reg = (opcode >> 3) & 0x07;
        let value = self.read_operand(bus, reg);
        let result = self.alu_inc8(value);
        self.write_operand(bus, reg, result);
        if reg == HL_INDIRECT { 12 } else { 4 }
    }

    /// `DEC r` / `DEC (HL)`
    pub(in crate::cpu) fn exec_dec8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let reg = (opcode >> 3) & 0x07;
        let value = self.read_operand(bus, reg);
        let result = self.alu_dec8(value);
        self.write_operand(bus, reg, result);
        if reg == HL_INDIRECT { 12 } else { 4 }
    }

    /// `INC rr`
    pub(in crate::cpu) fn exec_inc16(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let rp = Self::rp_for(opcode);
        let value = self.regs.get16(rp).wrapping_add(1);
        self.regs.set16(rp, value);
        8
    }

    /// `DEC rr`
    pub(in crate::cpu) fn exec_dec16(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let rp = Self::rp_for(opcode);
        let value = self.regs.get16(rp).wrapping_sub(1);
        self.regs.set16(rp, value);
        8
    }

    /// `ADD HL,rr`
    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.regs.get16(Self::rp_for(opcode));
        self.alu_add16_hl(value);
        8
    }

    /// `ADD SP,r8`
    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        16
    }

    /// RLCA / RRCA / RLA / RRA. Unlike the CB forms these always clear Z.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let a = self.regs.a;
        self.regs.a = match opcode {
            0x07 => self.alu_rlc(a),
            0x0F => self.alu_rrc(a),
            0x17 => self.alu_rl(a),
            _ => self.alu_rr(a),
        };
        self.set_flag(Flag::Z, false);
        4
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.alu_daa();
        4
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::N, true);
        4
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        4
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        4
    }
}
