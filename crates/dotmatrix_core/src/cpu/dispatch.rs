use lazy_static::lazy_static;

use super::{Bus, Cpu};

/// An instruction handler: executes the opcode passed in and returns its
/// cost in T-cycles.
pub(super) type Handler = fn(&mut Cpu, &mut dyn Bus, u8) -> u32;

lazy_static! {
    /// Opcode byte to handler. `None` slots are the documented opcode holes
    /// and surface as an unsupported-opcode failure.
    static ref OPCODE_TABLE: [Option<Handler>; 256] = build_table();
}

#[inline]
pub(super) fn lookup(opcode: u8) -> Option<Handler> {
    OPCODE_TABLE[opcode as usize]
}

fn map(table: &mut [Option<Handler>; 256], opcodes: impl IntoIterator<Item = u8>, handler: Handler) {
    for opcode in opcodes {
        debug_assert!(table[opcode as usize].is_none(), "opcode 0x{opcode:02X} mapped twice");
        table[opcode as usize] = Some(handler);
    }
}

/// Opcodes `base`, `base + 0x10`, `base + 0x20`, `base + 0x30`.
fn column(base: u8) -> [u8; 4] {
    [base, base + 0x10, base + 0x20, base + 0x30]
}

/// Opcodes `base`, `base + 0x08`, ... `base + 0x38`.
fn row8(base: u8) -> impl Iterator<Item = u8> {
    (0..8u8).map(move |i| base + i * 8)
}

fn build_table() -> [Option<Handler>; 256] {
    let mut t: [Option<Handler>; 256] = [None; 256];

    // Control and system.
    map(&mut t, [0x00], Cpu::exec_nop);
    map(&mut t, [0x10], Cpu::exec_stop);
    map(&mut t, [0x76], Cpu::exec_halt);
    map(&mut t, [0xF3], Cpu::exec_di);
    map(&mut t, [0xFB], Cpu::exec_ei);
    map(&mut t, [0xCB], Cpu::exec_cb_prefix);

    // Loads.
    map(&mut t, column(0x01), Cpu::exec_ld_rr_d16);
    map(&mut t, column(0x02), Cpu::exec_ld_indirect_a);
    map(&mut t, column(0x0A), Cpu::exec_ld_a_indirect);
    map(&mut t, row8(0x06), Cpu::exec_ld_r_d8);
    map(&mut t, (0x40..=0x7F).filter(|&op| op != 0x76), Cpu::exec_ld_r_r);
    map(&mut t, [0x08], Cpu::exec_ld_a16_sp);
    map(&mut t, [0xE0, 0xF0], Cpu::exec_ldh_a8);
    map(&mut t, [0xE2, 0xF2], Cpu::exec_ldh_c);
    map(&mut t, [0xEA, 0xFA], Cpu::exec_ld_a16_a);
    map(&mut t, [0xF8], Cpu::exec_ld_hl_sp_r8);
    map(&mut t, [0xF9], Cpu::exec_ld_sp_hl);

    // Arithmetic and logic.
    map(&mut t, 0x80..=0xBF, Cpu::exec_alu_reg);
    map(&mut t, row8(0xC6), Cpu::exec_alu_imm);
    map(&mut t, row8(0x04), Cpu::exec_inc8);
    map(&mut t, row8(0x05), Cpu::exec_dec8);
    map(&mut t, column(0x03), Cpu::exec_inc16);
    map(&mut t, column(0x0B), Cpu::exec_dec16);
    map(&mut t, column(0x09), Cpu::exec_add_hl_rr);
    map(&mut t, [0xE8], Cpu::exec_add_sp_r8);
    map(&mut t, [0x07, 0x0F, 0x17, 0x1F], Cpu::exec_rotate_a);
    map(&mut t, [0x27], Cpu::exec_daa);
    map(&mut t, [0x2F], Cpu::exec_cpl);
    map(&mut t, [0x37], Cpu::exec_scf);
    map(&mut t, [0x3F], Cpu::exec_ccf);

    // Jumps, calls, returns.
    map(&mut t, [0xC3, 0xC2, 0xCA, 0xD2, 0xDA], Cpu::exec_jp);
    map(&mut t, [0xE9], Cpu::exec_jp_hl);
    map(&mut t, [0x18, 0x20, 0x28, 0x30, 0x38], Cpu::exec_jr);
    map(&mut t, [0xCD, 0xC4, 0xCC, 0xD4, 0xDC], Cpu::exec_call);
    map(&mut t, [0xC9], Cpu::exec_ret);
    map(&mut t, [0xC0, 0xC8, 0xD0, 0xD8], Cpu::exec_ret_cc);
    map(&mut t, [0xD9], Cpu::exec_reti);
    map(&mut t, row8(0xC7), Cpu::exec_rst);

    // Stack.
    map(&mut t, [0xC5, 0xD5, 0xE5, 0xF5], Cpu::exec_push);
    map(&mut t, [0xC1, 0xD1, 0xE1, 0xF1], Cpu::exec_pop);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_opcode_holes_are_unmapped() {
        const HOLES: [u8; 11] = [
            0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
        ];
        for opcode in 0..=0xFFu8 {
            assert_eq!(
                lookup(opcode).is_none(),
                HOLES.contains(&opcode),
                "unexpected table entry for opcode 0x{opcode:02X}"
            );
        }
    }
}
