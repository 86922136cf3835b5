use super::interrupts::Interrupt;
use super::AddressSpace;

/// Divider increments once this many cycles have accumulated.
const DIVIDER_PERIOD: u32 = 255;

/// TIMA period in cycles, by TAC frequency bits.
const TIMER_PERIODS: [i32; 4] = [1024, 16, 64, 256];

impl AddressSpace {
    #[inline]
    fn timer_enabled(&self) -> bool {
        self.memory[0xFF07] & 0x04 != 0
    }

    #[inline]
    fn timer_frequency(&self) -> u8 {
        self.memory[0xFF07] & 0x03
    }

    pub(super) fn reload_timer_period(&mut self) {
        self.timer_counter = TIMER_PERIODS[self.timer_frequency() as usize];
    }

    /// TAC write. The running period restarts only if the frequency bits
    /// change.
    pub(super) fn write_timer_control(&mut self, value: u8) {
        let old_frequency = self.timer_frequency();
        self.memory[0xFF07] = value;
        if self.timer_frequency() != old_frequency {
            self.reload_timer_period();
        }
    }

    /// Advance DIV and, when enabled, TIMA by `cycles`.
    pub(super) fn update_timers(&mut self, cycles: u32) {
        self.update_divider(cycles);

        if !self.timer_enabled() {
            return;
        }

        self.timer_counter -= cycles as i32;
        if self.timer_counter <= 0 {
            self.reload_timer_period();
            let tima = self.memory[0xFF05];
            if tima == 0xFF {
                self.memory[0xFF05] = self.memory[0xFF06];
                self.request_interrupt(Interrupt::Timer);
            } else {
                self.memory[0xFF05] = tima + 1;
            }
        }
    }

    fn update_divider(&mut self, cycles: u32) {
        self.divider_counter += cycles;
        if self.divider_counter >= DIVIDER_PERIOD {
            self.divider_counter = 0;
            self.memory[0xFF04] = self.memory[0xFF04].wrapping_add(1);
        }
    }
}
