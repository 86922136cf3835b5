use super::AddressSpace;

/// Start of sprite attribute memory.
const OAM_START: u16 = 0xFE00;
/// Bytes copied by one transfer (40 sprites of 4 bytes).
const OAM_LEN: u16 = 0xA0;

impl AddressSpace {
    /// Copy `page * 0x100 ..+ 0xA0` into OAM.
    ///
    /// Both sides go through the normal read and write paths, so banked
    /// and mirrored source regions resolve as they do for the CPU. The
    /// copy completes immediately.
    pub(super) fn do_dma_transfer(&mut self, page: u8) {
        let base = (page as u16) << 8;
        log::debug!("DMA: 0x{base:04X} -> 0x{OAM_START:04X}");
        for i in 0..OAM_LEN {
            let byte = self.read(base.wrapping_add(i));
            self.write(OAM_START + i, byte);
        }
    }
}
