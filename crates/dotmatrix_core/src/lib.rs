pub mod app;
pub mod cpu;
pub mod error;
pub mod machine;

pub use app::DmgApp;
pub use error::{EmulatorError, Result};
pub use machine::{Console, ConsoleConfig};

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// CPU clock rate in T-cycles per second.
pub const CLOCK_HZ: u32 = 4_194_304;
/// Cycle budget for one 60 Hz frame.
pub const CYCLES_PER_FRAME: u32 = CLOCK_HZ / 60;
