use super::{Bus, Cpu};

/// Interrupt enable register.
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt request register.
pub const IF_ADDR: u16 = 0xFF0F;

/// Service vector per request bit, lowest index first (highest priority).
///
/// The serial source (bit 3) has no vector here: its request bit can be set
/// and enabled but is never dispatched and stays pending.
const VECTORS: [Option<u16>; 5] = [Some(0x0040), Some(0x0048), Some(0x0050), None, Some(0x0060)];

/// Cost of an interrupt entry in T-cycles.
const DISPATCH_CYCLES: u32 = 20;

impl Cpu {
    /// Service the highest-priority pending interrupt if IME is set.
    ///
    /// Servicing clears IME and the request bit, pushes PC and jumps to the
    /// vector. A pending enabled request also wakes a halted CPU, even with
    /// IME clear. Returns the cycles consumed (0 when nothing was taken).
    pub fn dispatch_interrupts(&mut self, bus: &mut dyn Bus) -> u32 {
        let ie = bus.read8(IE_ADDR);
        let iflags = bus.read8(IF_ADDR);
        let pending = ie & iflags & 0x1F;
        if pending == 0 {
            return 0;
        }
        self.halted = false;

        if !self.ime {
            return 0;
        }

        for (index, vector) in VECTORS.iter().enumerate() {
            let mask = 1u8 << index;
            if pending & mask == 0 {
                continue;
            }
            let Some(vector) = *vector else {
                continue;
            };

            self.ime = false;
            bus.write8(IF_ADDR, iflags & !mask);
            let pc = self.regs.pc;
            self.push_u16(bus, pc);
            self.regs.pc = vector;

            log::debug!(
                "CPU interrupt: idx={} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
                index,
                vector,
                pc,
                self.regs.sp,
                iflags,
                ie,
            );
            return DISPATCH_CYCLES;
        }

        0
    }
}
