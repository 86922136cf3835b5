/// The eight console buttons.
///
/// The discriminant is the button's bit index in the joypad state byte:
/// 0-3 are the direction pad, 4-7 the action buttons.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Right = 0,
    Left = 1,
    Up = 2,
    Down = 3,
    A = 4,
    B = 5,
    Select = 6,
    Start = 7,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::Right,
        Key::Left,
        Key::Up,
        Key::Down,
        Key::A,
        Key::B,
        Key::Select,
        Key::Start,
    ];

    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// True for A/B/Select/Start.
    #[inline]
    pub const fn is_button(self) -> bool {
        self.bit() > 3
    }

    pub fn from_bit(bit: u8) -> Option<Key> {
        Key::ALL.get(bit as usize).copied()
    }
}
