use super::{Cpu, Flag};

impl Cpu {
    #[inline]
    fn carry_in(&self, use_carry: bool) -> u16 {
        u16::from(use_carry && self.get_flag(Flag::C))
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// For ADC the carry-in is folded into the operand before both the
    /// half-carry and carry checks.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a as u16;
        let operand = value as u16 + self.carry_in(use_carry);
        let sum = a + operand;
        let result = (sum & 0xFF) as u8;

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, (a & 0x0F) + (operand & 0x0F) > 0x0F);
        self.set_flag(Flag::C, sum > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A. Borrow-in is folded into the
    /// operand the same way ADC folds its carry.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let operand = value as u16 + self.carry_in(use_carry);
        let result = self.sub_flags(operand);
        self.regs.a = result;
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value as u16);
    }

    fn sub_flags(&mut self, operand: u16) -> u8 {
        let a = self.regs.a as u16;
        let result = (a.wrapping_sub(operand) & 0xFF) as u8;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (a & 0x0F) < (operand & 0x0F));
        self.set_flag(Flag::C, a < operand);
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, true);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    /// Updates A, Z, H, C; leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }

        if !self.get_flag(Flag::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flag::C, adjust >= 0x60);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::Z, a == 0);
        self.regs.a = a;
    }

    /// 8-bit increment used by INC r and INC (HL). C is unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL). C is unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// `ADD HL,rr`: Z is unaffected, N cleared, H/C from bits 11 and 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, (hl as u32) + (value as u32) > 0xFFFF);

        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// Signed 8-bit offset added to a 16-bit base (`ADD SP,r8` and
    /// `LD HL,SP+r8`). Z and N are cleared; H and C come from the low byte.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.clear_flags();
        self.set_flag(Flag::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flag::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// Rotate right through carry. Returns the result and updates C; the
    /// caller decides how Z is reported.
    #[inline]
    pub(super) fn alu_rr(&mut self, value: u8) -> u8 {
        let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
        let result = (value >> 1) | carry_in;
        self.clear_flags();
        self.set_flag(Flag::C, (value & 0x01) != 0);
        result
    }

    /// Rotate left through carry.
    #[inline]
    pub(super) fn alu_rl(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.get_flag(Flag::C));
        let result = (value << 1) | carry_in;
        self.clear_flags();
        self.set_flag(Flag::C, (value & 0x80) != 0);
        result
    }

    #[inline]
    pub(super) fn alu_rlc(&mut self, value: u8) -> u8 {
        self.clear_flags();
        self.set_flag(Flag::C, (value & 0x80) != 0);
        value.rotate_left(1)
    }

    #[inline]
    pub(super) fn alu_rrc(&mut self, value: u8) -> u8 {
        self.clear_flags();
        self.set_flag(Flag::C, (value & 0x01) != 0);
        value.rotate_right(1)
    }

    /// `BIT b,r`: Z reflects the complement of the tested bit, H is set,
    /// N cleared and C preserved.
    #[inline]
    pub(super) fn alu_bit(&mut self, bit: u8, value: u8) {
        self.set_flag(Flag::Z, (value & (1 << bit)) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
    }
}
