use super::AddressSpace;

impl AddressSpace {
    /// Initialize I/O registers to the state the boot ROM leaves behind.
    ///
    /// Only used when starting without a bootstrap image; with one, the
    /// registers start zeroed and the image programs them.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        // Joypad: both groups selected.
        self.memory[0xFF00] = 0xCF;

        // Divider / timer.
        self.memory[0xFF04] = 0xAB;
        self.memory[0xFF05] = 0x00; // TIMA
        self.memory[0xFF06] = 0x00; // TMA
        self.memory[0xFF07] = 0x00; // TAC
        self.reload_timer_period();

        // V-blank request left over from the boot ROM; unused bits read 1.
        self.memory[0xFF0F] = 0xE1;

        // Sound registers. There is no audio unit, but the values are
        // visible to software.
        self.memory[0xFF10] = 0x80;
        self.memory[0xFF11] = 0xBF;
        self.memory[0xFF12] = 0xF3;
        self.memory[0xFF14] = 0xBF;
        self.memory[0xFF16] = 0x3F;
        self.memory[0xFF17] = 0x00;
        self.memory[0xFF19] = 0xBF;
        self.memory[0xFF1A] = 0x7F;
        self.memory[0xFF1B] = 0xFF;
        self.memory[0xFF1C] = 0x9F;
        self.memory[0xFF1E] = 0xBF;
        self.memory[0xFF20] = 0xFF;
        self.memory[0xFF21] = 0x00;
        self.memory[0xFF22] = 0x00;
        self.memory[0xFF23] = 0xBF;
        self.memory[0xFF24] = 0x77;
        self.memory[0xFF25] = 0xF3;
        self.memory[0xFF26] = 0xF1;

        // PPU registers.
        self.memory[0xFF40] = 0x91; // LCDC
        self.memory[0xFF41] = 0x85; // STAT
        self.memory[0xFF42] = 0x00; // SCY
        self.memory[0xFF43] = 0x00; // SCX
        self.memory[0xFF44] = 0x00; // LY
        self.memory[0xFF45] = 0x00; // LYC
        self.memory[0xFF47] = 0xFC; // BGP
        self.memory[0xFF48] = 0xFF; // OBP0
        self.memory[0xFF49] = 0xFF; // OBP1
        self.memory[0xFF4A] = 0x00; // WY
        self.memory[0xFF4B] = 0x00; // WX

        // Boot ROM already disabled.
        self.memory[0xFF50] = 0x01;

        self.memory[0xFFFF] = 0x00; // IE
    }
}
