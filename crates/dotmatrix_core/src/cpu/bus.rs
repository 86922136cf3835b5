/// Abstraction over the console's address space as seen by the CPU.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side peripherals by the cycle cost of the instruction
    /// just executed.
    ///
    /// Implementations must advance the timer before the PPU. The default
    /// does nothing, which suits flat test buses.
    fn tick(&mut self, _cycles: u32) {}
}
