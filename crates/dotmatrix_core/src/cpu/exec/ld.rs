use crate::cpu::helpers::HL_INDIRECT;
use crate::cpu::{Bus, Cpu, Reg16};

/// Register pair selected by bits 4-5 of the 16-bit load/arith opcodes.
const RP_TABLE: [Reg16; 4] = [Reg16::BC, Reg16::DE, Reg16::HL, Reg16::SP];

impl Cpu {
    /// `LD rr,d16`
    pub(in crate::cpu) fn exec_ld_rr_d16(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.fetch16(bus);
        self.regs.set16(Self::rp_for(opcode), value);
        12
    }

    /// `LD r,d8` and `LD (HL),d8`
    pub(in crate::cpu) fn exec_ld_r_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let reg = (opcode >> 3) & 0x07;
        let value = self.fetch8(bus);
        self.write_operand(bus, reg, value);

        if reg == HL_INDIRECT { 12 } else { 8 }
    }

    /// The systematic `LD r1,r2` block (0x40-0x7F, except HALT at 0x76).
    /// A slot addressed through HL costs double.
    pub(in crate::cpu) fn exec_ld_r_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_operand(bus, src);
        self.write_operand(bus, dst, value);

        if dst == HL_INDIRECT || src == HL_INDIRECT { 8 } else { 4 }
    }

    /// Address for the `(BC)`, `(DE)`, `(HL+)`, `(HL-)` family, applying the
    /// HL post-increment/decrement.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    /// `LD (BC/DE/HL+/HL-),A`
    pub(in crate::cpu) fn exec_ld_indirect_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
        8
    }

    /// `LD A,(BC/DE/HL+/HL-)`
    pub(in crate::cpu) fn exec_ld_a_indirect(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
        8
    }

    /// `LD (a16),SP`
    pub(in crate::cpu) fn exec_ld_a16_sp(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        let sp = self.regs.sp;
        bus.write8(addr, (sp & 0xFF) as u8);
        bus.write8(addr.wrapping_add(1), (sp >> 8) as u8);
        20
    }

    /// `LDH (a8),A` / `LDH A,(a8)`
    pub(in crate::cpu) fn exec_ldh_a8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = 0xFF00 | self.fetch8(bus) as u16;
        if opcode == 0xE0 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        12
    }

    /// `LD (C),A` / `LD A,(C)`
    pub(in crate::cpu) fn exec_ldh_c(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = 0xFF00 | self.regs.c as u16;
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        8
    }

    /// `LD (a16),A` / `LD A,(a16)`
    pub(in crate::cpu) fn exec_ld_a16_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        if opcode == 0xEA {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        16
    }

    /// `LD SP,HL`
    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.sp = self.regs.hl();
        8
    }

    /// `LD HL,SP+r8`
    pub(in crate::cpu) fn exec_ld_hl_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        12
    }

    pub(in crate::cpu) fn rp_for(opcode: u8) -> Reg16 {
        RP_TABLE[((opcode >> 4) & 0x03) as usize]
    }
}
