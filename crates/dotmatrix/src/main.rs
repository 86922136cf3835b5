use std::path::PathBuf;

use anyhow::{Context, Result};
use dotmatrix::{RunOptions, BOOT_ROM_ENV};

const USAGE: &str = "Usage: dotmatrix <rom_path> [frames] [out_rgb24_path]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let frames: u32 = match args.next() {
        Some(frames) => frames
            .parse()
            .with_context(|| format!("invalid frame count '{frames}'\n{USAGE}"))?,
        None => 60,
    };
    let out_path = args.next().map(PathBuf::from);
    let boot_rom_path = std::env::var_os(BOOT_ROM_ENV).map(PathBuf::from);

    let options = RunOptions {
        rom_path,
        frames,
        out_path,
        boot_rom_path,
    };
    dotmatrix::run(&options)?;

    match &options.out_path {
        Some(out_path) => println!(
            "Wrote 160x144 rgb24 frame after {} frames to '{}'",
            options.frames,
            out_path.display()
        ),
        None => println!("Ran {} frames", options.frames),
    }
    Ok(())
}
