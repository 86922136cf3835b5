use dotmatrix_common::key::Key;
use typed_builder::TypedBuilder;

use super::AddressSpace;
use crate::cpu::Cpu;
use crate::{Result, CYCLES_PER_FRAME, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Construction options for a [`Console`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct ConsoleConfig {
    /// Boot ROM image mapped over 0x0000 until the program writes 0xFF50.
    /// Without one the console starts in the post-boot state at 0x0100.
    #[builder(default, setter(strip_option))]
    pub bootstrap: Option<Vec<u8>>,
    /// Cycle budget of one `step_frame` call.
    #[builder(default = CYCLES_PER_FRAME)]
    pub frame_cycles: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A complete DMG: CPU plus the address space it drives.
///
/// The console is the single owner of all emulated state; the CPU reaches
/// memory and peripherals only through the `&mut` borrow of `bus` handed to
/// it on every step.
pub struct Console {
    pub cpu: Cpu,
    pub bus: AddressSpace,
    config: ConsoleConfig,
    rom: Vec<u8>,
}

impl Console {
    pub fn new(rom: &[u8], config: ConsoleConfig) -> Result<Self> {
        let (cpu, bus) = Self::power_on(rom, &config)?;
        Ok(Self {
            cpu,
            bus,
            config,
            rom: rom.to_vec(),
        })
    }

    fn power_on(rom: &[u8], config: &ConsoleConfig) -> Result<(Cpu, AddressSpace)> {
        match &config.bootstrap {
            Some(image) => Ok((Cpu::bootstrap(), AddressSpace::with_bootstrap(rom, image)?)),
            None => Ok((Cpu::new(), AddressSpace::new(rom)?)),
        }
    }

    /// Power-cycle: same cartridge and configuration, fresh state. External
    /// RAM contents survive, as they would on a battery-backed cartridge.
    pub fn reset(&mut self) -> Result<()> {
        let saved_ram = self.bus.ram_banks().to_vec();
        let (cpu, bus) = Self::power_on(&self.rom, &self.config)?;
        self.cpu = cpu;
        self.bus = bus;
        self.bus.load_ram_banks(&saved_ram);
        Ok(())
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Execute one instruction, advance the timer and PPU by its cost and
    /// service at most one interrupt. Returns the cycles consumed.
    pub fn step(&mut self) -> Result<u32> {
        self.cpu.step(&mut self.bus)
    }

    /// Run instructions until the frame budget is spent and return the
    /// framebuffer. The last instruction may overrun the budget.
    pub fn step_frame(&mut self) -> Result<&[u8]> {
        let mut cycles = 0u32;
        while cycles < self.config.frame_cycles {
            cycles += self.step()?;
        }
        Ok(self.bus.framebuffer())
    }

    /// RGB24 frame, row-major, 3 bytes per pixel.
    pub fn framebuffer(&self) -> &[u8] {
        self.bus.framebuffer()
    }

    /// RGB of the pixel at (`x`, `y`). Panics if outside the 160x144 screen.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        assert!(x < SCREEN_WIDTH && y < SCREEN_HEIGHT, "pixel ({x}, {y}) off screen");
        let offset = (y * SCREEN_WIDTH + x) * 3;
        let fb = self.bus.framebuffer();
        [fb[offset], fb[offset + 1], fb[offset + 2]]
    }

    pub fn key_pressed(&mut self, key: Key) {
        self.bus.key_pressed(key);
    }

    pub fn key_released(&mut self, key: Key) {
        self.bus.key_released(key);
    }

    /// Read memory without stepping anything.
    pub fn peek(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }
}
