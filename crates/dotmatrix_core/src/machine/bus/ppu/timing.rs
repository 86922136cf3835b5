use super::super::{AddressSpace, Interrupt, SCANLINE_CYCLES};
use super::{LcdControl, LcdStatus};

/// First line of the vertical blank.
const VBLANK_LINE: u8 = 144;
/// Last line before LY wraps to 0.
const LAST_LINE: u8 = 153;
/// Mode 2 (OAM scan) lasts while at least this many line cycles remain.
const MODE2_BOUND: i32 = SCANLINE_CYCLES - 80;
/// Mode 3 (pixel transfer) lasts while at least this many remain.
const MODE3_BOUND: i32 = MODE2_BOUND - 172;

impl AddressSpace {
    /// Advance the LCD by `cycles`: update STAT, then step the scanline
    /// counter, raising V-blank at line 144 and rendering visible lines.
    pub(in super::super) fn update_graphics(&mut self, cycles: u32) {
        self.update_lcd_status();

        if !self.lcd_control().contains(LcdControl::LCD_ENABLE) {
            return;
        }

        self.scanline_counter -= cycles as i32;
        if self.scanline_counter > 0 {
            return;
        }

        self.scanline_counter = SCANLINE_CYCLES;
        let mut line = self.memory[0xFF44].wrapping_add(1);

        if line == VBLANK_LINE {
            self.request_interrupt(Interrupt::VBlank);
            log::debug!("PPU: V-blank (IF=0x{:02X})", self.memory[0xFF0F]);
        }
        if line > LAST_LINE {
            line = 0;
        }
        self.memory[0xFF44] = line;

        if line < VBLANK_LINE {
            self.render_scanline(line);
        }
    }

    /// Recompute STAT's mode and coincidence bits.
    ///
    /// A mode's STAT interrupt is requested only on entry into that mode.
    /// The coincidence interrupt is requested on every check while LY
    /// matches LYC and its enable bit is set.
    fn update_lcd_status(&mut self) {
        let mut status = self.lcd_status();

        if !self.lcd_control().contains(LcdControl::LCD_ENABLE) {
            self.scanline_counter = SCANLINE_CYCLES;
            self.memory[0xFF44] = 0;
            status.set_mode(1);
            self.set_lcd_status(status);
            return;
        }

        let line = self.memory[0xFF44];
        let previous_mode = status.mode();

        let (mode, source) = if line >= VBLANK_LINE {
            (1, Some(LcdStatus::VBLANK_INT))
        } else if self.scanline_counter >= MODE2_BOUND {
            (2, Some(LcdStatus::OAM_INT))
        } else if self.scanline_counter >= MODE3_BOUND {
            (3, None)
        } else {
            (0, Some(LcdStatus::HBLANK_INT))
        };
        status.set_mode(mode);

        let mode_interrupt = source.is_some_and(|source| status.contains(source));
        if mode_interrupt && mode != previous_mode {
            self.request_interrupt(Interrupt::LcdStat);
        }

        if line == self.memory[0xFF45] {
            status.insert(LcdStatus::COINCIDENCE);
            if status.contains(LcdStatus::COINCIDENCE_INT) {
                self.request_interrupt(Interrupt::LcdStat);
            }
        } else {
            status.remove(LcdStatus::COINCIDENCE);
        }

        self.set_lcd_status(status);
    }
}
