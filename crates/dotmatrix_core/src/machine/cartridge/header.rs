use super::BankController;

const TITLE_START: usize = 0x134;
const TITLE_END: usize = 0x144;
const KIND_ADDR: usize = 0x147;
const ROM_SIZE_ADDR: usize = 0x148;
const RAM_SIZE_ADDR: usize = 0x149;

/// Fields decoded from the cartridge header at 0x0134..0x014F.
///
/// Missing bytes (images shorter than the header) decode as zero.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CartridgeHeader {
    pub title: String,
    pub kind: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Self {
        let byte = |addr: usize| rom.get(addr).copied().unwrap_or(0);

        let title_bytes = rom.get(TITLE_START..TITLE_END.min(rom.len())).unwrap_or(&[]);
        let title = title_bytes
            .iter()
            .take_while(|&&b| b != 0)
            .filter(|b| b.is_ascii_graphic() || **b == b' ')
            .map(|&b| b as char)
            .collect::<String>()
            .trim_end()
            .to_string();

        Self {
            title,
            kind: byte(KIND_ADDR),
            rom_size_code: byte(ROM_SIZE_ADDR),
            ram_size_code: byte(RAM_SIZE_ADDR),
        }
    }

    pub fn controller(&self) -> BankController {
        BankController::from_kind(self.kind)
    }

    /// ROM size in bytes announced by the header (32 KiB << code).
    pub fn rom_size(&self) -> usize {
        match self.rom_size_code {
            code @ 0x00..=0x08 => 0x8000 << code,
            _ => 0,
        }
    }

    /// External RAM size in bytes announced by the header.
    pub fn ram_size(&self) -> usize {
        match self.ram_size_code {
            0x01 => 0x800,
            0x02 => 0x2000,
            0x03 => 0x8000,
            0x04 => 0x20000,
            0x05 => 0x10000,
            _ => 0,
        }
    }
}
