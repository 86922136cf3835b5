use dotmatrix_common::key::Key;
use dotmatrix_common::Color;

use super::{AddressSpace, BankController, CartridgeHeader, Console, ConsoleConfig, LcdStatus};
use crate::cpu::Bus;
use crate::{EmulatorError, CYCLES_PER_FRAME, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Cartridge image of `banks` 16 KiB banks, every byte of bank N set to N,
/// with header kind byte `kind`.
fn banked_rom(kind: u8, banks: usize) -> Vec<u8> {
    let mut rom = vec![0u8; banks * 0x4000];
    for (bank, chunk) in rom.chunks_mut(0x4000).enumerate() {
        chunk.fill(bank as u8);
    }
    rom[0x147] = kind;
    rom
}

/// Plain 32 KiB cartridge with `program` at the 0x0100 entry point and
/// NOPs everywhere else.
fn program_rom(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x100..0x100 + program.len()].copy_from_slice(program);
    rom
}

fn bus_for(kind: u8, banks: usize) -> AddressSpace {
    AddressSpace::new(&banked_rom(kind, banks)).unwrap()
}

fn clear_interrupt_requests(bus: &mut AddressSpace) {
    bus.write(0xFF0F, 0x00);
}

// ---------------------------------------------------------------------------
// Cartridge and bank controller
// ---------------------------------------------------------------------------

#[test]
fn header_fields_decode() {
    let mut rom = banked_rom(0x03, 4);
    rom[0x134..0x134 + 7].copy_from_slice(b"DOTTEST");
    rom[0x141..0x144].fill(0);
    rom[0x148] = 0x01;
    rom[0x149] = 0x03;

    let header = CartridgeHeader::parse(&rom);
    assert_eq!(header.title, "DOTTEST");
    assert_eq!(header.kind, 0x03);
    assert_eq!(header.controller(), BankController::Mbc1);
    assert_eq!(header.rom_size(), 0x10000);
    assert_eq!(header.ram_size(), 0x8000);

    assert_eq!(CartridgeHeader::parse(&[0u8; 16]), CartridgeHeader::default());
}

#[test]
fn controller_kind_from_header_byte() {
    for kind in [0x01, 0x02, 0x03] {
        assert_eq!(BankController::from_kind(kind), BankController::Mbc1);
    }
    for kind in [0x05, 0x06] {
        assert_eq!(BankController::from_kind(kind), BankController::Mbc2);
    }
    // Unknown kinds fall back to no banking instead of failing.
    assert_eq!(BankController::from_kind(0x00), BankController::None);
    assert_eq!(BankController::from_kind(0x19), BankController::None);
}

#[test]
fn empty_cartridge_is_rejected() {
    assert_eq!(AddressSpace::new(&[]).err(), Some(EmulatorError::EmptyCartridge));
    assert!(Console::new(&[], ConsoleConfig::default()).is_err());
}

#[test]
fn rom_bank_is_never_zero() {
    for kind in [0x01, 0x05] {
        let mut bus = bus_for(kind, 4);
        for value in 0..=0xFFu8 {
            bus.write(0x2000, value);
            assert_ne!(bus.rom_bank(), 0, "kind 0x{kind:02X} low write 0x{value:02X}");
            bus.write(0x4000, value);
            assert_ne!(bus.rom_bank(), 0, "kind 0x{kind:02X} high write 0x{value:02X}");
            bus.write(0x6000, value);
            assert_ne!(bus.rom_bank(), 0, "kind 0x{kind:02X} mode write 0x{value:02X}");
        }
    }
}

#[test]
fn mbc1_switches_rom_window() {
    let mut bus = bus_for(0x01, 4);
    assert_eq!(bus.read(0x4000), 1);
    assert_eq!(bus.read(0x0000), 0);

    bus.write(0x2000, 0x03);
    assert_eq!(bus.rom_bank(), 3);
    assert_eq!(bus.read(0x4000), 3);
    assert_eq!(bus.read(0x7FFF), 3);

    // Bank 0 selects bank 1.
    bus.write(0x3FFF, 0x00);
    assert_eq!(bus.read(0x5000), 1);

    // Writes never land in the flat array.
    assert_eq!(bus.read(0x2000), 0);
}

#[test]
fn mbc1_low_write_keeps_high_bits() {
    let mut bus = bus_for(0x01, 4);
    bus.write(0x4000, 0x20);
    assert_eq!(bus.rom_bank(), 0x21);
    bus.write(0x2000, 0x02);
    assert_eq!(bus.rom_bank(), 0x22);
    // Beyond the end of a 4-bank image.
    assert_eq!(bus.read(0x4000), 0xFF);
}

#[test]
fn mbc1_ram_banking_mode() {
    let mut bus = bus_for(0x03, 4);

    // Disabled RAM drops writes.
    bus.write(0xA000, 0x11);
    assert_eq!(bus.read(0xA000), 0x00);

    bus.write(0x0000, 0x0A);
    assert!(bus.ram_enabled());
    bus.write(0x6000, 0x01);
    bus.write(0x4000, 0x02);
    assert_eq!(bus.ram_bank(), 2);
    assert_eq!(bus.rom_bank(), 1);

    bus.write(0xA000, 0x55);
    assert_eq!(bus.read(0xA000), 0x55);
    assert_eq!(bus.ram_banks()[2 * 0x2000], 0x55);

    // Back to ROM banking: RAM bank 0 again.
    bus.write(0x6000, 0x00);
    assert_eq!(bus.ram_bank(), 0);
    assert_eq!(bus.read(0xA000), 0x00);

    // Only a low nibble of 0 disables; other values leave RAM as is.
    bus.write(0x0000, 0x05);
    assert!(bus.ram_enabled());
    bus.write(0x1FFF, 0xF0);
    assert!(!bus.ram_enabled());
}

#[test]
fn mbc2_bank_and_ram_enable_rules() {
    let mut bus = bus_for(0x05, 8);

    bus.write(0x2100, 0x37);
    assert_eq!(bus.rom_bank(), 0x07);
    assert_eq!(bus.read(0x4000), 7);

    // 0x4000..0x7FFF is MBC1-only.
    bus.write(0x4000, 0xE0);
    assert_eq!(bus.rom_bank(), 0x07);

    // Address bit 4 set: enable request ignored.
    bus.write(0x0010, 0x0A);
    assert!(!bus.ram_enabled());
    bus.write(0x0000, 0x0A);
    assert!(bus.ram_enabled());
}

#[test]
fn no_controller_ignores_banking_writes() {
    let mut bus = bus_for(0x00, 2);
    bus.write(0x2000, 0x05);
    bus.write(0x0000, 0x0A);
    assert_eq!(bus.rom_bank(), 1);
    assert!(!bus.ram_enabled());
    assert_eq!(bus.read(0x4000), 1);
    assert_eq!(bus.read(0x2000), 0);
}

#[test]
fn external_ram_save_and_restore() {
    let mut bus = bus_for(0x03, 2);
    bus.write(0x0000, 0x0A);
    bus.write(0xA000, 0x42);
    assert_eq!(bus.ram_banks()[0], 0x42);

    bus.load_ram_banks(&[1, 2, 3]);
    assert_eq!(bus.read(0xA000), 1);
    assert_eq!(bus.read(0xA001), 2);
    assert_eq!(bus.read(0xA002), 3);
    assert_eq!(bus.ram_banks().len(), super::RAM_BANKS_SIZE);
}

// ---------------------------------------------------------------------------
// Address space regions
// ---------------------------------------------------------------------------

#[test]
fn echo_ram_writes_both_copies() {
    let mut bus = bus_for(0x00, 2);
    for addr in 0xE000u16..0xFE00 {
        let value = (addr as u8) ^ 0x5A;
        bus.write(addr, value);
        assert_eq!(bus.read(addr), value, "echo 0x{addr:04X}");
        assert_eq!(bus.read(addr - 0x2000), value, "mirror 0x{:04X}", addr - 0x2000);
    }
}

#[test]
fn oam_is_not_mirrored() {
    let mut bus = bus_for(0x00, 2);
    bus.write(0xFE00, 0x77);
    assert_eq!(bus.read(0xFE00), 0x77);
    assert_eq!(bus.read(0xDE00), 0x00);
}

#[test]
fn restricted_area_ignores_writes() {
    let mut bus = bus_for(0x00, 2);
    for addr in 0xFEA0u16..=0xFEFE {
        bus.write(addr, 0x99);
        assert_eq!(bus.read(addr), 0x00, "0x{addr:04X}");
    }
}

#[test]
fn divider_and_scanline_writes_reset() {
    let mut bus = bus_for(0x00, 2);
    for value in [0x00, 0x01, 0x7F, 0xFF] {
        bus.write(0xFF04, value);
        assert_eq!(bus.read(0xFF04), 0);
        bus.write(0xFF44, value);
        assert_eq!(bus.read(0xFF44), 0);
    }
}

#[test]
fn power_on_io_registers() {
    let bus = bus_for(0x00, 2);
    assert_eq!(bus.read(0xFF07), 0x00);
    assert_eq!(bus.read(0xFF40), 0x91);
    assert_eq!(bus.read(0xFF47), 0xFC);
    assert_eq!(bus.read(0xFF26), 0xF1);
    assert_eq!(bus.read(0xFFFF), 0x00);
}

// ---------------------------------------------------------------------------
// Timer
// ---------------------------------------------------------------------------

#[test]
fn timer_period_16_increments_tima() {
    let mut bus = bus_for(0x00, 2);
    bus.write(0xFF05, 0x00);
    bus.write(0xFF07, 0x05);

    bus.tick(15);
    assert_eq!(bus.read(0xFF05), 0);
    bus.tick(1);
    assert_eq!(bus.read(0xFF05), 1);
    bus.tick(16);
    assert_eq!(bus.read(0xFF05), 2);
}

#[test]
fn timer_overflow_reloads_from_tma_and_requests_interrupt() {
    let mut bus = bus_for(0x00, 2);
    clear_interrupt_requests(&mut bus);
    bus.write(0xFF06, 0xAB);
    bus.write(0xFF05, 0xFF);
    bus.write(0xFF07, 0x05);

    bus.tick(16);
    assert_eq!(bus.read(0xFF05), 0xAB);
    assert_eq!(bus.read(0xFF0F) & 0x04, 0x04);
}

#[test]
fn timer_stopped_when_disabled() {
    let mut bus = bus_for(0x00, 2);
    bus.write(0xFF05, 0x10);
    bus.write(0xFF07, 0x01);
    bus.tick(1024);
    assert_eq!(bus.read(0xFF05), 0x10);
}

#[test]
fn tac_write_reloads_only_on_frequency_change() {
    let mut bus = bus_for(0x00, 2);
    bus.write(0xFF05, 0x00);
    bus.write(0xFF07, 0x05);
    bus.tick(10);

    // Same frequency: the running period continues.
    bus.write(0xFF07, 0x05);
    bus.tick(6);
    assert_eq!(bus.read(0xFF05), 1);

    // New frequency (period 64) restarts the count.
    bus.tick(10);
    bus.write(0xFF07, 0x06);
    bus.tick(63);
    assert_eq!(bus.read(0xFF05), 1);
    bus.tick(1);
    assert_eq!(bus.read(0xFF05), 2);
}

#[test]
fn divider_counts_every_255_cycles() {
    let mut bus = bus_for(0x00, 2);
    bus.write(0xFF04, 0x00);
    bus.tick(254);
    assert_eq!(bus.read(0xFF04), 0);
    bus.tick(1);
    assert_eq!(bus.read(0xFF04), 1);
}

// ---------------------------------------------------------------------------
// Joypad and DMA
// ---------------------------------------------------------------------------

#[test]
fn joypad_reads_selected_group() {
    let mut bus = bus_for(0x00, 2);
    bus.write(0xFF00, 0x20);
    assert_eq!(bus.read(0xFF00), 0xEF);
    clear_interrupt_requests(&mut bus);

    bus.key_pressed(Key::Right);
    assert_eq!(bus.read(0xFF00), 0xEE);
    assert_eq!(bus.read(0xFF0F) & 0x10, 0x10);

    // Already pressed: no second request.
    clear_interrupt_requests(&mut bus);
    bus.key_pressed(Key::Right);
    assert_eq!(bus.read(0xFF0F) & 0x10, 0x00);

    // Buttons are not selected: state changes, no request.
    bus.key_pressed(Key::Start);
    assert_eq!(bus.read(0xFF0F) & 0x10, 0x00);
    assert_eq!(bus.read(0xFF00), 0xEE);

    bus.write(0xFF00, 0x10);
    assert_eq!(bus.read(0xFF00), 0xD7);
    bus.key_released(Key::Start);
    assert_eq!(bus.read(0xFF00), 0xDF);

    bus.write(0xFF00, 0x30);
    assert_eq!(bus.read(0xFF00), 0xFF);
}

#[test]
fn joypad_both_groups_selected_are_combined() {
    let mut bus = bus_for(0x00, 2);
    bus.write(0xFF00, 0x00);
    bus.key_pressed(Key::Left);
    bus.key_pressed(Key::Select);
    assert_eq!(bus.read(0xFF00) & 0x0F, 0x09);
}

#[test]
fn dma_copies_into_oam() {
    let mut bus = bus_for(0x00, 2);
    for i in 0..0xA0u16 {
        bus.write(0xC000 + i, i as u8);
    }
    bus.write(0xFF46, 0xC0);
    for i in 0..0xA0u16 {
        assert_eq!(bus.read(0xFE00 + i), i as u8, "OAM 0x{:04X}", 0xFE00 + i);
    }
}

#[test]
fn dma_source_follows_banking() {
    let mut bus = bus_for(0x01, 4);
    bus.write(0x2000, 0x03);
    bus.write(0xFF46, 0x40);
    assert!((0..0xA0u16).all(|i| bus.read(0xFE00 + i) == 3));
}

// ---------------------------------------------------------------------------
// PPU timing
// ---------------------------------------------------------------------------

#[test]
fn lcd_modes_follow_line_budget() {
    let mut bus = bus_for(0x00, 2);
    bus.tick(100);
    assert_eq!(bus.lcd_status().mode(), 2);
    bus.tick(4);
    assert_eq!(bus.lcd_status().mode(), 3);
    bus.tick(200);
    assert_eq!(bus.lcd_status().mode(), 3);
    bus.tick(4);
    assert_eq!(bus.lcd_status().mode(), 0);
}

#[test]
fn vblank_at_line_144_and_wrap_after_153() {
    let mut bus = bus_for(0x00, 2);
    clear_interrupt_requests(&mut bus);

    for _ in 0..143 {
        bus.tick(456);
    }
    assert_eq!(bus.read(0xFF44), 143);
    assert_eq!(bus.read(0xFF0F) & 0x01, 0);

    bus.tick(456);
    assert_eq!(bus.read(0xFF44), 144);
    assert_eq!(bus.read(0xFF0F) & 0x01, 0x01);

    bus.tick(4);
    assert_eq!(bus.lcd_status().mode(), 1);

    for _ in 0..9 {
        bus.tick(456);
    }
    assert_eq!(bus.read(0xFF44), 153);
    bus.tick(456);
    assert_eq!(bus.read(0xFF44), 0);
}

#[test]
fn stat_interrupt_on_mode_entry_only() {
    let mut bus = bus_for(0x00, 2);
    bus.write(0xFF41, LcdStatus::HBLANK_INT.bits());
    clear_interrupt_requests(&mut bus);

    bus.tick(100);
    bus.tick(4);
    bus.tick(200);
    assert_eq!(bus.read(0xFF0F) & 0x02, 0);

    bus.tick(4);
    assert_eq!(bus.lcd_status().mode(), 0);
    assert_eq!(bus.read(0xFF0F) & 0x02, 0x02);

    clear_interrupt_requests(&mut bus);
    bus.tick(4);
    assert_eq!(bus.read(0xFF0F) & 0x02, 0);
}

#[test]
fn coincidence_flag_and_interrupt() {
    let mut bus = bus_for(0x00, 2);
    bus.write(0xFF45, 1);
    bus.write(0xFF41, LcdStatus::COINCIDENCE_INT.bits());
    clear_interrupt_requests(&mut bus);

    bus.tick(456);
    assert!(!bus.lcd_status().contains(LcdStatus::COINCIDENCE));
    assert_eq!(bus.read(0xFF44), 1);

    bus.tick(4);
    assert!(bus.lcd_status().contains(LcdStatus::COINCIDENCE));
    assert_eq!(bus.read(0xFF0F) & 0x02, 0x02);
}

#[test]
fn lcd_off_forces_vblank_mode_and_line_zero() {
    let mut bus = bus_for(0x00, 2);
    bus.tick(456 * 3);
    bus.tick(456);
    assert_ne!(bus.read(0xFF44), 0);

    bus.write(0xFF40, 0x11);
    bus.tick(4);
    assert_eq!(bus.read(0xFF44), 0);
    assert_eq!(bus.lcd_status().mode(), 1);

    // Time does not advance while off.
    bus.tick(456 * 2);
    assert_eq!(bus.read(0xFF44), 0);

    bus.write(0xFF40, 0x91);
    bus.tick(4);
    assert_eq!(bus.lcd_status().mode(), 2);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

const LIGHT_GRAY: [u8; 3] = [0xCC, 0xCC, 0xCC];

/// LCD on, unsigned tile data, background and sprites enabled, identity
/// palettes. Tile 1: left half colour 0, right half colour 1. Tile 2: solid
/// colour 3.
fn render_bus() -> AddressSpace {
    let mut bus = bus_for(0x00, 2);
    bus.write(0xFF40, 0x93);
    bus.write(0xFF47, 0xE4);
    bus.write(0xFF48, 0xE4);
    bus.write(0xFF49, 0xE4);
    for row in 0..8u16 {
        bus.write(0x8010 + row * 2, 0x0F);
        bus.write(0x8010 + row * 2 + 1, 0x00);
        bus.write(0x8020 + row * 2, 0xFF);
        bus.write(0x8020 + row * 2 + 1, 0xFF);
    }
    bus
}

fn place_sprite(bus: &mut AddressSpace, slot: u16, y: u8, x: u8, tile: u8, attrs: u8) {
    let entry = 0xFE00 + slot * 4;
    bus.write(entry, y);
    bus.write(entry + 1, x);
    bus.write(entry + 2, tile);
    bus.write(entry + 3, attrs);
}

fn pixel(bus: &AddressSpace, x: usize, y: usize) -> [u8; 3] {
    let offset = (y * SCREEN_WIDTH + x) * 3;
    let fb = bus.framebuffer();
    [fb[offset], fb[offset + 1], fb[offset + 2]]
}

#[test]
fn background_colour_zero_paints_white() {
    let mut bus = render_bus();
    // Pre-fill line 1 black by rendering a solid tile, then switch to tile 0.
    bus.write(0x9800, 0x02);
    bus.tick(456);
    assert_eq!(pixel(&bus, 0, 1), Color::BLACK.rgb());

    bus.write(0x9800, 0x00);
    for _ in 0..154 {
        bus.tick(456);
    }
    assert_eq!(bus.read(0xFF44), 1);
    assert_eq!(pixel(&bus, 0, 1), Color::WHITE.rgb());
}

#[test]
fn sprite_colour_zero_is_transparent() {
    let mut bus = render_bus();
    bus.write(0x9800, 0x02);
    place_sprite(&mut bus, 0, 17, 8, 1, 0x00);

    bus.tick(456);

    // Left half of the sprite is colour 0: background shows through.
    for x in 0..4 {
        assert_eq!(pixel(&bus, x, 1), Color::BLACK.rgb(), "x={x}");
    }
    for x in 4..8 {
        assert_eq!(pixel(&bus, x, 1), LIGHT_GRAY, "x={x}");
    }
    assert_eq!(pixel(&bus, 8, 1), Color::WHITE.rgb());
}

#[test]
fn sprite_horizontal_flip_and_background_priority() {
    let mut bus = render_bus();
    bus.write(0x9800, 0x02);
    place_sprite(&mut bus, 0, 17, 8, 1, 0x20);
    place_sprite(&mut bus, 1, 17, 24, 1, 0x80);

    bus.tick(456);

    assert_eq!(pixel(&bus, 0, 1), LIGHT_GRAY);
    assert_eq!(pixel(&bus, 7, 1), Color::BLACK.rgb());

    // A behind-background sprite still shows over background colour 0.
    assert_eq!(pixel(&bus, 20, 1), LIGHT_GRAY);
}

#[test]
fn behind_background_sprite_hidden_by_non_zero_colour() {
    let mut bus = render_bus();
    bus.write(0x9800, 0x02);
    place_sprite(&mut bus, 0, 17, 8, 1, 0x80);

    bus.tick(456);
    assert_eq!(pixel(&bus, 4, 1), Color::BLACK.rgb());
}

#[test]
fn sprite_vertical_flip_and_palette_select() {
    let mut bus = render_bus();
    // Tile 3: only row 7 has colour 3.
    bus.write(0x8030 + 14, 0xFF);
    bus.write(0x8030 + 15, 0xFF);
    bus.write(0xFF49, 0x40);
    // Flipped, so screen row 1 (sprite row 0) shows tile row 7 via OBP1.
    place_sprite(&mut bus, 0, 17, 8, 3, 0x40 | 0x10);

    bus.tick(456);
    assert_eq!(pixel(&bus, 0, 1), LIGHT_GRAY);
}

#[test]
fn sprites_off_screen_are_clipped() {
    let mut bus = render_bus();
    // Half the sprite hangs off the left edge.
    place_sprite(&mut bus, 0, 17, 4, 1, 0x00);
    bus.tick(456);
    assert_eq!(pixel(&bus, 0, 1), LIGHT_GRAY);
    assert_eq!(pixel(&bus, 4, 1), Color::WHITE.rgb());
}

#[test]
fn window_overlays_from_wx_minus_7() {
    let mut bus = render_bus();
    bus.write(0xFF40, 0xF1);
    bus.write(0xFF4A, 0);
    bus.write(0xFF4B, 87);
    for i in 0..32u16 {
        bus.write(0x9C00 + i, 0x02);
    }

    bus.tick(456);
    assert_eq!(pixel(&bus, 79, 1), Color::WHITE.rgb());
    assert_eq!(pixel(&bus, 80, 1), Color::BLACK.rgb());
    assert_eq!(pixel(&bus, 159, 1), Color::BLACK.rgb());
}

#[test]
fn signed_tile_addressing() {
    let mut bus = render_bus();
    // LCDC bit 4 clear: tile 0 lives at 0x9000.
    bus.write(0xFF40, 0x81);
    for row in 0..8u16 {
        bus.write(0x9000 + row * 2, 0xFF);
        bus.write(0x9000 + row * 2 + 1, 0xFF);
    }
    bus.tick(456);
    assert_eq!(pixel(&bus, 0, 1), Color::BLACK.rgb());
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

#[test]
fn load_load_add_through_console() {
    let rom = program_rom(&[0x3E, 0x05, 0x06, 0x03, 0x80]);
    let mut console = Console::new(&rom, ConsoleConfig::default()).unwrap();
    for _ in 0..3 {
        console.step().unwrap();
    }
    assert_eq!(console.cpu.regs.a, 8);
    assert_eq!(console.cpu.regs.f & 0xF0, 0x00);
}

#[test]
fn vblank_serviced_before_timer() {
    let rom = program_rom(&[0x00]);
    let mut console = Console::new(&rom, ConsoleConfig::default()).unwrap();
    console.bus.write(0xFFFF, 0x05);
    console.bus.write(0xFF0F, 0x05);
    console.cpu.ime = true;

    assert_eq!(console.step().unwrap(), 24);
    assert_eq!(console.cpu.regs.pc, 0x0040);
    assert_eq!(console.cpu.regs.sp, 0xFFFC);
    assert_eq!(console.peek(0xFFFC), 0x01);
    assert_eq!(console.peek(0xFFFD), 0x01);
    assert_eq!(console.peek(0xFF0F) & 0x1F, 0x04);
    assert!(!console.cpu.ime);
}

#[test]
fn timer_interrupt_raised_and_taken_in_same_step() {
    // A NOP loop with the timer one tick from overflow.
    let rom = program_rom(&[0x00]);
    let mut console = Console::new(&rom, ConsoleConfig::default()).unwrap();
    console.bus.write(0xFF0F, 0x00);
    console.bus.write(0xFFFF, 0x04);
    console.bus.write(0xFF05, 0xFF);
    console.bus.write(0xFF07, 0x05);
    console.cpu.ime = true;

    for _ in 0..3 {
        console.step().unwrap();
    }
    assert_eq!(console.cpu.regs.pc, 0x0103);

    assert_eq!(console.step().unwrap(), 24);
    assert_eq!(console.cpu.regs.pc, 0x0050);
}

#[test]
fn unsupported_opcode_stops_the_frame() {
    let rom = program_rom(&[0x00, 0xD3]);
    let mut console = Console::new(&rom, ConsoleConfig::default()).unwrap();
    let expected = EmulatorError::UnsupportedOpcode {
        opcode: 0xD3,
        pc: 0x0101,
    };
    assert_eq!(console.step_frame().err(), Some(expected));
    assert_eq!(console.step().err(), Some(expected));
    assert!(console.cpu.is_locked());
}

#[test]
fn step_frame_spends_the_frame_budget() {
    let rom = vec![0u8; 0x8000];
    let mut console = Console::new(&rom, ConsoleConfig::default()).unwrap();
    console.bus.write(0xFF0F, 0x00);

    let frame_len = console.step_frame().unwrap().len();
    assert_eq!(frame_len, SCREEN_WIDTH * SCREEN_HEIGHT * 3);

    // NOPs only: PC advanced by the number of 4-cycle steps taken.
    let steps = (CYCLES_PER_FRAME + 3) / 4;
    assert_eq!(console.cpu.regs.pc, 0x0100 + steps as u16);
    assert_eq!(console.peek(0xFF0F) & 0x01, 0x01);
}

#[test]
fn bootstrap_runs_from_zero_until_unmapped() {
    let mut rom = program_rom(&[]);
    rom[0] = 0xAA;
    // LD A,1 ; LDH (0x50),A
    let boot = vec![0x3E, 0x01, 0xE0, 0x50];
    let config = ConsoleConfig::builder().bootstrap(boot).build();
    let mut console = Console::new(&rom, config).unwrap();

    assert_eq!(console.cpu.regs.pc, 0x0000);
    assert_eq!(console.cpu.regs.af(), 0x0000);
    assert_eq!(console.peek(0x0000), 0x3E);
    assert_eq!(console.peek(0xFF40), 0x00);
    assert!(console.bus.bootstrap_mapped());

    console.step().unwrap();
    console.step().unwrap();

    assert!(!console.bus.bootstrap_mapped());
    assert_eq!(console.peek(0x0000), 0xAA);
    assert_eq!(console.peek(0x0002), 0x00);
    assert_eq!(console.cpu.regs.pc, 0x0004);
}

#[test]
fn keys_reach_the_joypad_register() {
    let rom = program_rom(&[]);
    let mut console = Console::new(&rom, ConsoleConfig::default()).unwrap();
    console.bus.write(0xFF00, 0x10);
    console.key_pressed(Key::A);
    assert_eq!(console.peek(0xFF00) & 0x0F, 0x0E);
    console.key_released(Key::A);
    assert_eq!(console.peek(0xFF00) & 0x0F, 0x0F);
}

#[test]
fn reset_keeps_external_ram() {
    let mut rom = banked_rom(0x03, 2);
    rom[0x100] = 0x00;
    let mut console = Console::new(&rom, ConsoleConfig::default()).unwrap();
    console.bus.write(0x0000, 0x0A);
    console.bus.write(0xA000, 0x42);
    console.cpu.regs.pc = 0x1234;

    console.reset().unwrap();

    assert_eq!(console.cpu.regs.pc, 0x0100);
    assert!(!console.bus.ram_enabled());
    assert_eq!(console.peek(0xA000), 0x42);
}

#[test]
fn pixel_reads_framebuffer() {
    let rom = program_rom(&[]);
    let console = Console::new(&rom, ConsoleConfig::default()).unwrap();
    assert_eq!(console.pixel(0, 0), Color::WHITE.rgb());
    assert_eq!(console.pixel(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1), Color::WHITE.rgb());
    assert_eq!(console.config().frame_cycles, CYCLES_PER_FRAME);
}
