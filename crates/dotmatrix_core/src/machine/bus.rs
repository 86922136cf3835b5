use super::cartridge::{BankState, CartridgeHeader};
use super::{MEMORY_SIZE, RAM_BANKS_SIZE};
use crate::{EmulatorError, Result, SCREEN_HEIGHT, SCREEN_WIDTH};

mod dma;
mod init;
mod interrupts;
mod joypad;
mod mmio;
mod ppu;
mod timer_io;
mod traits;

pub use interrupts::Interrupt;
pub use ppu::{LcdControl, LcdStatus};

/// Cycles per scanline.
pub(super) const SCANLINE_CYCLES: i32 = 456;

/// The console's 16-bit address space and every peripheral whose state is
/// visible through it.
///
/// The timer, PPU, DMA, joypad and interrupt controller are not separate
/// objects: they are operations over this struct's fields and registers,
/// so the program observes them through the same memory-mapped interface.
pub struct AddressSpace {
    pub(crate) memory: [u8; MEMORY_SIZE],
    /// Complete cartridge image as loaded.
    cartridge_rom: Vec<u8>,
    header: CartridgeHeader,
    /// External cartridge RAM behind 0xA000..0xBFFF.
    ram_banks: [u8; RAM_BANKS_SIZE],
    banks: BankState,
    /// RGB24 output, row-major, `SCREEN_WIDTH * SCREEN_HEIGHT * 3` bytes.
    framebuffer: Vec<u8>,
    /// Cycles left in the current scanline.
    scanline_counter: i32,
    /// Cycles accumulated towards the next DIV increment.
    divider_counter: u32,
    /// Cycles left until the next TIMA increment.
    timer_counter: i32,
    /// One bit per `Key`, 0 = pressed.
    joypad_state: u8,
    /// Length of the bootstrap image still mapped over 0x0000, 0 once
    /// unmapped (or when booting without one).
    bootstrap_len: usize,
}

impl AddressSpace {
    /// Build the address space around a cartridge image, with I/O registers
    /// in the state the boot ROM leaves them in.
    pub fn new(rom: &[u8]) -> Result<Self> {
        let mut bus = Self::empty(rom)?;
        bus.apply_dmg_initial_io_state();
        Ok(bus)
    }

    /// Build the address space with `bootstrap` mapped at 0x0000 and I/O
    /// registers zeroed, as at true power-on.
    pub fn with_bootstrap(rom: &[u8], bootstrap: &[u8]) -> Result<Self> {
        let mut bus = Self::empty(rom)?;
        let len = bootstrap.len().min(0x8000);
        bus.memory[..len].copy_from_slice(&bootstrap[..len]);
        bus.bootstrap_len = len;
        log::info!("Bootstrap image mapped ({len} bytes)");
        Ok(bus)
    }

    fn empty(rom: &[u8]) -> Result<Self> {
        if rom.is_empty() {
            return Err(EmulatorError::EmptyCartridge);
        }

        let header = CartridgeHeader::parse(rom);
        let controller = header.controller();
        log::info!(
            "Cartridge '{}': kind=0x{:02X} ({:?}) rom={} bytes (header {}) ram={} bytes",
            header.title,
            header.kind,
            controller,
            rom.len(),
            header.rom_size(),
            header.ram_size(),
        );

        let mut bus = Self {
            memory: [0; MEMORY_SIZE],
            cartridge_rom: rom.to_vec(),
            header,
            ram_banks: [0; RAM_BANKS_SIZE],
            banks: BankState::new(controller),
            framebuffer: vec![0xFF; SCREEN_WIDTH * SCREEN_HEIGHT * 3],
            scanline_counter: SCANLINE_CYCLES,
            divider_counter: 0,
            timer_counter: 0,
            joypad_state: 0xFF,
            bootstrap_len: 0,
        };

        // 0x0000..0x7FFF mirrors the start of the image; the switchable half
        // is served from `cartridge_rom` on read.
        let len = rom.len().min(0x8000);
        bus.memory[..len].copy_from_slice(&rom[..len]);
        bus.reload_timer_period();
        Ok(bus)
    }

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    /// Currently selected switchable ROM bank (never 0).
    pub fn rom_bank(&self) -> u8 {
        self.banks.rom_bank
    }

    pub fn ram_bank(&self) -> u8 {
        self.banks.ram_bank
    }

    pub fn ram_enabled(&self) -> bool {
        self.banks.ram_enabled
    }

    /// External RAM contents, for saving battery-backed cartridges.
    pub fn ram_banks(&self) -> &[u8] {
        &self.ram_banks
    }

    /// Restore external RAM contents. Extra bytes are ignored and missing
    /// ones left unchanged.
    pub fn load_ram_banks(&mut self, data: &[u8]) {
        let len = data.len().min(RAM_BANKS_SIZE);
        self.ram_banks[..len].copy_from_slice(&data[..len]);
    }

    pub fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }

    pub fn bootstrap_mapped(&self) -> bool {
        self.bootstrap_len != 0
    }

    /// Restore the cartridge bytes that the bootstrap image covered.
    fn unmap_bootstrap(&mut self) {
        let len = self.bootstrap_len.min(self.cartridge_rom.len());
        self.memory[..self.bootstrap_len].fill(0);
        self.memory[..len].copy_from_slice(&self.cartridge_rom[..len]);
        self.bootstrap_len = 0;
        log::info!("Bootstrap image unmapped");
    }
}
