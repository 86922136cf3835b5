mod render;
mod timing;

use bitflags::bitflags;

use super::AddressSpace;

bitflags! {
    /// LCDC (0xFF40).
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct LcdControl: u8 {
        const BG_ENABLE = 1 << 0;
        const OBJ_ENABLE = 1 << 1;
        /// 8x16 sprites when set, 8x8 otherwise.
        const OBJ_SIZE = 1 << 2;
        /// Background tile map at 0x9C00 when set, 0x9800 otherwise.
        const BG_TILE_MAP = 1 << 3;
        /// Unsigned tile data at 0x8000 when set, signed at 0x8800 otherwise.
        const TILE_DATA = 1 << 4;
        const WINDOW_ENABLE = 1 << 5;
        /// Window tile map at 0x9C00 when set, 0x9800 otherwise.
        const WINDOW_TILE_MAP = 1 << 6;
        const LCD_ENABLE = 1 << 7;
    }
}

bitflags! {
    /// STAT (0xFF41).
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct LcdStatus: u8 {
        /// Current mode, 0-3.
        const MODE = 0b11;
        /// LY == LYC.
        const COINCIDENCE = 1 << 2;
        const HBLANK_INT = 1 << 3;
        const VBLANK_INT = 1 << 4;
        const OAM_INT = 1 << 5;
        const COINCIDENCE_INT = 1 << 6;
    }
}

impl LcdStatus {
    #[inline]
    pub fn mode(self) -> u8 {
        (self & LcdStatus::MODE).bits()
    }

    #[inline]
    pub fn set_mode(&mut self, mode: u8) {
        *self = (*self - LcdStatus::MODE) | LcdStatus::from_bits_retain(mode & 0x03);
    }
}

impl AddressSpace {
    #[inline]
    pub fn lcd_control(&self) -> LcdControl {
        LcdControl::from_bits_retain(self.memory[0xFF40])
    }

    #[inline]
    pub fn lcd_status(&self) -> LcdStatus {
        LcdStatus::from_bits_retain(self.memory[0xFF41])
    }

    #[inline]
    fn set_lcd_status(&mut self, status: LcdStatus) {
        self.memory[0xFF41] = status.bits();
    }
}
