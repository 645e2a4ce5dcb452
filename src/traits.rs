// Traits used across the library. These are the seams to the SoC the controller is built into.

/// Raw 32-bit access to the controller's register block. `offset` is in bytes from the
/// register base, and is always one of the constants in `regs`.
pub trait RegisterAccess {
    fn read(&self, offset: usize) -> u32;

    fn write(&mut self, offset: usize, value: u32);

    /// Read-modify-write.
    fn modify<F>(&mut self, offset: usize, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let val = self.read(offset);
        self.write(offset, f(val));
    }
}

/// The controller's clock lives in the SoC's clock and reset generator, outside its own
/// register block. This selects its rate and gates it.
pub trait SystemClock {
    /// `clock` is the rate selector from the operation that is about to run, as found in the
    /// flash's ID table entry.
    fn set_clock(&mut self, clock: u32, enable: bool);
}

/// For boards where the controller clock is fixed by the bootloader.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedClock;

impl SystemClock for FixedClock {
    fn set_clock(&mut self, _clock: u32, _enable: bool) {}
}
