//! Instruction handlers.
//!
//! Every handler has the same shape, `fn(&mut Cpu, &mut dyn Bus, u8) -> u32`,
//! so that it can sit in the opcode table. The opcode byte is passed back in
//! so one handler can decode a whole systematic block.

mod alu;
mod control;
mod ld;
mod stack;
mod system;
