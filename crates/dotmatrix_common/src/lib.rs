pub mod app;
pub mod key;

/// An opaque RGB colour as written into a host framebuffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new_rgb(0xFF, 0xFF, 0xFF);
    /// DMG shade 1.
    pub const LIGHT_GRAY: Color = Color::new_rgb(0xCC, 0xCC, 0xCC);
    /// DMG shade 2.
    pub const DARK_GRAY: Color = Color::new_rgb(0x77, 0x77, 0x77);
    pub const BLACK: Color = Color::new_rgb(0x00, 0x00, 0x00);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    #[inline]
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Map a 2-bit DMG shade (0 = lightest) to its display colour.
    #[inline]
    pub const fn from_shade(shade: u8) -> Color {
        match shade & 0x03 {
            0 => Color::WHITE,
            1 => Color::LIGHT_GRAY,
            2 => Color::DARK_GRAY,
            _ => Color::BLACK,
        }
    }
}
