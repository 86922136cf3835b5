use dotmatrix_common::app::App;
use dotmatrix_common::key::Key;

use crate::{Console, EmulatorError, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Host-facing wrapper that drives a [`Console`] one frame per `update`.
///
/// A fatal emulation error stops the machine: the error is logged once,
/// kept in `error` and `should_exit` turns true.
pub struct DmgApp {
    pub console: Console,
    should_exit: bool,
    error: Option<EmulatorError>,
    frame_counter: u64,
    last_pc: u16,
    pc_stagnant_frames: u32,
}

impl DmgApp {
    pub fn new(console: Console) -> Self {
        Self {
            console,
            should_exit: false,
            error: None,
            frame_counter: 0,
            last_pc: 0,
            pc_stagnant_frames: 0,
        }
    }

    /// The error that stopped emulation, if any.
    pub fn error(&self) -> Option<EmulatorError> {
        self.error
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }
}

impl App for DmgApp {
    fn init(&mut self) {
        log::info!("DMG init: '{}'", self.console.bus.header().title);
        self.last_pc = self.console.cpu.regs.pc;
    }

    fn update(&mut self, screen: &mut [u8]) {
        if self.should_exit {
            return;
        }

        if let Err(err) = self.console.step_frame() {
            log::error!("DMG stopped after {} frames: {err}", self.frame_counter);
            self.error = Some(err);
            self.should_exit = true;
        }

        let frame = self.console.framebuffer();
        let len = screen.len().min(frame.len());
        screen[..len].copy_from_slice(&frame[..len]);

        self.frame_counter = self.frame_counter.wrapping_add(1);

        let regs = &self.console.cpu.regs;
        if regs.pc == self.last_pc {
            self.pc_stagnant_frames = self.pc_stagnant_frames.saturating_add(1);
        } else {
            self.pc_stagnant_frames = 0;
            self.last_pc = regs.pc;
        }

        if self.frame_counter == 1 || self.frame_counter % 60 == 0 {
            let bus = &self.console.bus;
            log::debug!(
                "DMG: frame={} pc=0x{:04X} sp=0x{:04X} af=0x{:04X} bc=0x{:04X} de=0x{:04X} hl=0x{:04X} ime={} halted={} IF=0x{:02X} IE=0x{:02X} LCDC=0x{:02X} STAT=0x{:02X} LY={} ROM bank={}",
                self.frame_counter,
                regs.pc,
                regs.sp,
                regs.af(),
                regs.bc(),
                regs.de(),
                regs.hl(),
                self.console.cpu.ime,
                self.console.cpu.halted,
                bus.read(0xFF0F),
                bus.read(0xFFFF),
                bus.read(0xFF40),
                bus.read(0xFF41),
                bus.read(0xFF44),
                bus.rom_bank(),
            );
        }

        if self.pc_stagnant_frames == 600 {
            log::warn!(
                "DMG: PC unchanged for ~600 frames at 0x{:04X} (halted={})",
                self.last_pc,
                self.console.cpu.halted,
            );
        }
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        log::debug!("DMG key event: {key:?} down={is_down}");
        if is_down {
            self.console.key_pressed(key);
        } else {
            self.console.key_released(key);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("DMG exit after {} frames", self.frame_counter);
        self.should_exit = true;
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn title(&self) -> String {
        let title = &self.console.bus.header().title;
        if title.is_empty() {
            "dotmatrix".to_string()
        } else {
            format!("dotmatrix - {title}")
        }
    }
}
