use dotmatrix_common::key::Key;

use super::interrupts::Interrupt;
use super::AddressSpace;

/// P1 bit that selects the direction pad when low.
const SELECT_DPAD: u8 = 0x10;
/// P1 bit that selects the action buttons when low.
const SELECT_BUTTONS: u8 = 0x20;

impl AddressSpace {
    /// Compose P1 from the stored select bits and the current key state.
    ///
    /// A group contributes its four keys to the low nibble only while its
    /// select bit is low; with both selected the groups are ANDed and with
    /// neither selected the nibble reads 0xF.
    pub(super) fn read_joypad(&self) -> u8 {
        let select = self.memory[0xFF00] & (SELECT_DPAD | SELECT_BUTTONS);
        let mut low = 0x0F;
        if select & SELECT_DPAD == 0 {
            low &= self.joypad_state & 0x0F;
        }
        if select & SELECT_BUTTONS == 0 {
            low &= self.joypad_state >> 4;
        }
        0xC0 | select | low
    }

    /// Mark `key` pressed, requesting the joypad interrupt when it was
    /// previously released and its group is currently selected.
    pub fn key_pressed(&mut self, key: Key) {
        let mask = 1u8 << key.bit();
        let was_released = self.joypad_state & mask != 0;
        self.joypad_state &= !mask;

        let group = if key.is_button() { SELECT_BUTTONS } else { SELECT_DPAD };
        let selected = self.memory[0xFF00] & group == 0;
        if was_released && selected {
            self.request_interrupt(Interrupt::Joypad);
        }
    }

    pub fn key_released(&mut self, key: Key) {
        self.joypad_state |= 1 << key.bit();
    }
}
