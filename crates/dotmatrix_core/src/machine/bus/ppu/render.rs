use bitflags::bitflags;
use dotmatrix_common::Color;

use super::super::AddressSpace;
use super::LcdControl;
use crate::SCREEN_WIDTH;

bitflags! {
    /// Byte 3 of an OAM entry.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    struct SpriteAttributes: u8 {
        /// Use OBP1 instead of OBP0.
        const PALETTE = 1 << 4;
        const X_FLIP = 1 << 5;
        const Y_FLIP = 1 << 6;
        /// Hidden behind non-zero background colours.
        const BEHIND_BG = 1 << 7;
    }
}

const OAM_START: usize = 0xFE00;
const SPRITE_COUNT: usize = 40;

/// Resolve a 2-bit colour index through a palette register to a shade.
#[inline]
fn palette_shade(palette: u8, index: u8) -> u8 {
    (palette >> (index * 2)) & 0x03
}

impl AddressSpace {
    /// Draw visible line `line` into the framebuffer: background and window
    /// first, then sprites.
    pub(super) fn render_scanline(&mut self, line: u8) {
        let lcdc = self.lcd_control();
        let mut bg_indices = [0u8; SCREEN_WIDTH];

        if lcdc.contains(LcdControl::BG_ENABLE) {
            self.render_tiles(lcdc, line, &mut bg_indices);
        } else {
            for x in 0..SCREEN_WIDTH {
                self.put_pixel(x, line, Color::WHITE);
            }
        }

        if lcdc.contains(LcdControl::OBJ_ENABLE) {
            self.render_sprites(lcdc, line, &bg_indices);
        }
    }

    fn render_tiles(&mut self, lcdc: LcdControl, line: u8, bg_indices: &mut [u8; SCREEN_WIDTH]) {
        let scroll_y = self.memory[0xFF42];
        let scroll_x = self.memory[0xFF43];
        let window_y = self.memory[0xFF4A];
        let window_x = self.memory[0xFF4B] as i32 - 7;
        let palette = self.memory[0xFF47];

        let window_active = lcdc.contains(LcdControl::WINDOW_ENABLE) && line >= window_y;
        let bg_map: u16 = if lcdc.contains(LcdControl::BG_TILE_MAP) { 0x9C00 } else { 0x9800 };
        let window_map: u16 = if lcdc.contains(LcdControl::WINDOW_TILE_MAP) { 0x9C00 } else { 0x9800 };

        for (x, slot) in bg_indices.iter_mut().enumerate() {
            let (map, px, py) = if window_active && x as i32 >= window_x {
                (window_map, (x as i32 - window_x) as u8, line - window_y)
            } else {
                (bg_map, (x as u8).wrapping_add(scroll_x), line.wrapping_add(scroll_y))
            };

            let map_addr = map + (py as u16 / 8) * 32 + px as u16 / 8;
            let tile = self.memory[map_addr as usize];
            let tile_addr = Self::tile_data_address(lcdc, tile);
            let index = self.tile_pixel(tile_addr, py % 8, px % 8);

            *slot = index;
            self.put_pixel(x, line, Color::from_shade(palette_shade(palette, index)));
        }
    }

    fn render_sprites(&mut self, lcdc: LcdControl, line: u8, bg_indices: &[u8; SCREEN_WIDTH]) {
        let height: i32 = if lcdc.contains(LcdControl::OBJ_SIZE) { 16 } else { 8 };
        let line = line as i32;

        for sprite in 0..SPRITE_COUNT {
            let entry = OAM_START + sprite * 4;
            let y = self.memory[entry] as i32 - 16;
            let x = self.memory[entry + 1] as i32 - 8;
            let mut tile = self.memory[entry + 2];
            let attrs = SpriteAttributes::from_bits_retain(self.memory[entry + 3]);

            if line < y || line >= y + height {
                continue;
            }
            if height == 16 {
                tile &= 0xFE;
            }

            let mut row = line - y;
            if attrs.contains(SpriteAttributes::Y_FLIP) {
                row = height - 1 - row;
            }

            let palette = if attrs.contains(SpriteAttributes::PALETTE) {
                self.memory[0xFF49]
            } else {
                self.memory[0xFF48]
            };
            let tile_addr = 0x8000 + tile as u16 * 16;

            for col in 0..8 {
                let px = x + col;
                if px < 0 || px >= SCREEN_WIDTH as i32 {
                    continue;
                }
                let bit_col = if attrs.contains(SpriteAttributes::X_FLIP) { 7 - col } else { col };
                let index = self.tile_pixel(tile_addr, row as u8, bit_col as u8);

                // Colour 0 is transparent for sprites.
                if index == 0 {
                    continue;
                }
                if attrs.contains(SpriteAttributes::BEHIND_BG) && bg_indices[px as usize] != 0 {
                    continue;
                }

                let color = Color::from_shade(palette_shade(palette, index));
                self.put_pixel(px as usize, line as u8, color);
            }
        }
    }

    /// Start of a tile's 16 bytes, honouring the signed 0x8800 addressing
    /// mode when LCDC bit 4 is clear.
    #[inline]
    fn tile_data_address(lcdc: LcdControl, tile: u8) -> u16 {
        if lcdc.contains(LcdControl::TILE_DATA) {
            0x8000 + tile as u16 * 16
        } else {
            0x8800 + ((tile as i8 as i16 + 128) as u16) * 16
        }
    }

    /// 2-bit colour index of pixel (`col`, `row`) of the tile at `tile_addr`.
    /// Each row is two bitplane bytes, low plane first; column 0 is bit 7.
    #[inline]
    fn tile_pixel(&self, tile_addr: u16, row: u8, col: u8) -> u8 {
        let row_addr = tile_addr + row as u16 * 2;
        let lo = self.memory[row_addr as usize];
        let hi = self.memory[row_addr as usize + 1];
        let bit = 7 - col;
        (((hi >> bit) & 0x01) << 1) | ((lo >> bit) & 0x01)
    }

    #[inline]
    fn put_pixel(&mut self, x: usize, y: u8, color: Color) {
        let offset = (y as usize * SCREEN_WIDTH + x) * 3;
        self.framebuffer[offset..offset + 3].copy_from_slice(&color.rgb());
    }
}
