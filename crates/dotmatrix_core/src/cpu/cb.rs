use super::helpers::HL_INDIRECT;
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Handle CB-prefixed instructions (rotates, shifts, BIT, RES, SET).
    ///
    /// The second byte decodes as `xx yyy zzz`: `x` selects the group, `y`
    /// the operation or bit number and `z` the register operand.
    pub(super) fn exec_cb_prefix(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let cb = self.fetch8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let indirect = z == HL_INDIRECT;
        let value = self.read_operand(bus, z);

        match x {
            0 => {
                let result = match y {
                    0 => self.alu_rlc(value),
                    1 => self.alu_rrc(value),
                    2 => self.alu_rl(value),
                    3 => self.alu_rr(value),
                    // SLA
                    4 => {
                        self.clear_flags();
                        self.set_flag(Flag::C, (value & 0x80) != 0);
                        value << 1
                    }
                    // SRA
                    5 => {
                        self.clear_flags();
                        self.set_flag(Flag::C, (value & 0x01) != 0);
                        (value >> 1) | (value & 0x80)
                    }
                    // SWAP
                    6 => {
                        self.clear_flags();
                        value.rotate_left(4)
                    }
                    // SRL
                    _ => {
                        self.clear_flags();
                        self.set_flag(Flag::C, (value & 0x01) != 0);
                        value >> 1
                    }
                };
                self.set_flag(Flag::Z, result == 0);
                self.write_operand(bus, z, result);
                if indirect { 16 } else { 8 }
            }
            1 => {
                self.alu_bit(y, value);
                if indirect { 12 } else { 8 }
            }
            2 => {
                self.write_operand(bus, z, value & !(1 << y));
                if indirect { 16 } else { 8 }
            }
            _ => {
                self.write_operand(bus, z, value | (1 << y));
                if indirect { 16 } else { 8 }
            }
        }
    }
}
