//! Register access over the controller's memory-mapped register block.

use tock_registers::{
    interfaces::{Readable, Writeable},
    registers::ReadWrite,
};

use crate::traits::RegisterAccess;

/// The controller's register block, at a fixed physical (or already-mapped) address.
pub struct Mmio {
    base: *mut u8,
}

impl Mmio {
    /// # Safety
    /// `base` must point to a HiSFC300 register block that stays mapped for the lifetime of
    /// this value, and nothing else may access it concurrently.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut u8,
        }
    }

    /// Address of the register block.
    pub fn base(&self) -> usize {
        self.base as usize
    }

    fn reg(&self, offset: usize) -> &ReadWrite<u32> {
        unsafe { &*(self.base.add(offset) as *const ReadWrite<u32>) }
    }
}

impl RegisterAccess for Mmio {
    fn read(&self, offset: usize) -> u32 {
        self.reg(offset).get()
    }

    fn write(&mut self, offset: usize, value: u32) {
        self.reg(offset).set(value);
    }
}
