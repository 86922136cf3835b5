use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// CPU in the state the boot ROM leaves it in when it hands control to
    /// the cartridge at 0x0100.
    pub fn new() -> Self {
        let mut cpu = Self::bootstrap();
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// CPU at true power-on: all registers zero and PC at 0x0000, where a
    /// bootstrap image is expected to be mapped.
    pub fn bootstrap() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            ime_enable_pending: false,
            locked: None,
        }
    }

    /// Reset to the post-boot state, clearing any lock.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn apply_dmg_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0; // Z, N, H, C = 1,0,1,1
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = u16::from_be_bytes([0xFF, 0xFE]);
        self.regs.pc = 0x0100;
        self.ime = false;
    }
}
