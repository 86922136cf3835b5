mod alu;
mod bus;
mod cb;
mod dispatch;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;

pub use bus::Bus;
pub use interrupts::{IE_ADDR, IF_ADDR};
pub use regs::{Flag, Reg16, Reg8, Registers};

use crate::error::{EmulatorError, Result};

/// DMG CPU core (Sharp LR35902).
///
/// Owns the register file and the interrupt master enable. Memory and
/// peripherals are reached through a [`Bus`] passed by exclusive reference
/// into every call, so the CPU itself holds no reference to the address
/// space.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    /// `EI` enables interrupts only after the following instruction.
    ime_enable_pending: bool,
    /// Set once an unsupported opcode has been fetched. The CPU cannot
    /// continue past it and reports the same failure on every later step.
    locked: Option<EmulatorError>,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        let bit = flag as u8;
        (self.regs.f & (1 << bit)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let bit = flag as u8;
        if value {
            self.regs.f |= 1 << bit;
        } else {
            self.regs.f &= !(1 << bit);
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    /// Execute a single instruction, advance the bus peripherals by its cost
    /// and then service at most one pending interrupt.
    ///
    /// Returns the total number of T-cycles consumed, including the cost of
    /// an interrupt entry if one was taken.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        self.step_dyn(bus)
    }

    fn step_dyn(&mut self, bus: &mut dyn Bus) -> Result<u32> {
        if let Some(err) = self.locked {
            return Err(err);
        }

        let cycles = if self.halted {
            // HALT idles like a NOP until an interrupt is pending.
            4
        } else {
            let enable_ime_after = self.ime_enable_pending;
            let pc = self.regs.pc;
            let opcode = self.fetch8(bus);
            let cycles = self.execute(bus, opcode, pc)?;
            // A DI executed in the delay slot cancels the pending enable.
            if enable_ime_after && self.ime_enable_pending {
                self.ime_enable_pending = false;
                self.ime = true;
            }
            cycles
        };

        // Timer and PPU advance before the dispatch check so that requests
        // they raise in this step are serviced in this step.
        bus.tick(cycles);

        let entry = self.dispatch_interrupts(bus);
        if entry != 0 {
            bus.tick(entry);
        }

        Ok(cycles + entry)
    }

    fn execute(&mut self, bus: &mut dyn Bus, opcode: u8, pc: u16) -> Result<u32> {
        match dispatch::lookup(opcode) {
            Some(handler) => {
                log::trace!("CPU: PC=0x{pc:04X} opcode=0x{opcode:02X}");
                Ok(handler(self, bus, opcode))
            }
            None => {
                let err = EmulatorError::UnsupportedOpcode { opcode, pc };
                log::error!(
                    "CPU locked: unsupported opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                    sp = self.regs.sp,
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                );
                self.locked = Some(err);
                Err(err)
            }
        }
    }
}
