use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dotmatrix_common::app::App;
use dotmatrix_core::{Console, ConsoleConfig, DmgApp};
use typed_builder::TypedBuilder;

/// Environment variable naming a boot ROM image to run before the cartridge.
pub const BOOT_ROM_ENV: &str = "DOTMATRIX_BOOT_ROM";

#[derive(Debug, TypedBuilder)]
pub struct RunOptions {
    #[builder(setter(into))]
    pub rom_path: PathBuf,
    #[builder(default = 60)]
    pub frames: u32,
    /// Where to write the final RGB24 frame, if anywhere.
    #[builder(default, setter(strip_option, into))]
    pub out_path: Option<PathBuf>,
    #[builder(default, setter(strip_option, into))]
    pub boot_rom_path: Option<PathBuf>,
}

fn read_file(path: &Path, what: &str) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {what} '{}'", path.display()))
}

/// Run a cartridge headless for `options.frames` frames and return the last
/// RGB24 frame.
pub fn run(options: &RunOptions) -> Result<Vec<u8>> {
    let rom = read_file(&options.rom_path, "ROM")?;
    log::info!("Loaded ROM '{}' ({} bytes)", options.rom_path.display(), rom.len());

    let config = match &options.boot_rom_path {
        Some(path) => ConsoleConfig::builder().bootstrap(read_file(path, "boot ROM")?).build(),
        None => ConsoleConfig::default(),
    };

    let console = Console::new(&rom, config).context("failed to power on console")?;
    let mut app = DmgApp::new(console);
    let mut screen = vec![0u8; (app.width() * app.height() * 3) as usize];

    app.init();
    for _ in 0..options.frames {
        app.update(&mut screen);
        if app.should_exit() {
            break;
        }
    }
    app.exit();

    if let Some(err) = app.error() {
        return Err(err).with_context(|| format!("emulation stopped at frame {}", app.frame_counter()));
    }

    if let Some(out_path) = &options.out_path {
        std::fs::write(out_path, &screen)
            .with_context(|| format!("failed to write '{}'", out_path.display()))?;
        log::info!("Wrote {} bytes to '{}'", screen.len(), out_path.display());
    }

    Ok(screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dotmatrix-{}-{name}", std::process::id()))
    }

    #[test]
    fn runs_nop_cartridge_and_writes_frame() {
        let rom_path = temp_path("nop.gb");
        let out_path = temp_path("nop.rgb");
        std::fs::write(&rom_path, vec![0u8; 0x8000]).unwrap();

        let options = RunOptions::builder()
            .rom_path(rom_path.clone())
            .frames(2)
            .out_path(out_path.clone())
            .build();
        let frame = run(&options).unwrap();

        assert_eq!(frame.len(), 160 * 144 * 3);
        assert_eq!(std::fs::read(&out_path).unwrap(), frame);

        let _ = std::fs::remove_file(rom_path);
        let _ = std::fs::remove_file(out_path);
    }

    #[test]
    fn unsupported_opcode_is_reported() {
        let rom_path = temp_path("bad.gb");
        let mut rom = vec![0u8; 0x8000];
        rom[0x100] = 0xDD;
        std::fs::write(&rom_path, rom).unwrap();

        let options = RunOptions::builder().rom_path(rom_path.clone()).build();
        let err = run(&options).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported opcode 0xDD"));

        let _ = std::fs::remove_file(rom_path);
    }

    #[test]
    fn missing_rom_is_an_error() {
        let options = RunOptions::builder().rom_path(temp_path("missing.gb")).build();
        assert!(run(&options).is_err());
    }
}
