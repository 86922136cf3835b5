use crate::key::Key;

/// Interface a host loop (windowed or headless) uses to drive an emulator.
pub trait App {
    fn init(&mut self);
    /// Advance one frame and copy the RGB24 framebuffer into `screen`.
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn title(&self) -> String;
}
