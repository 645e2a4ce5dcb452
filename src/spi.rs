//! Description of an attached SPI-NOR flash: the commands chosen for it from the ID table, its
//! geometry, and the driver whose command sequences it uses.

use crate::{
    error::Result,
    general::{self, General},
    host::Controller,
};

/// Indicates an error with the flash, or with how it was described.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError {
    /// The flash kept WIP set for longer than `HostConfig::ready_timeout` polls.
    ReadyTimeout,
    /// After a QE update, status register 2 didn't read back as expected.
    QeMismatch,
    /// The controller has two chip selects; 0 and 1.
    InvalidChipSelect,
    /// A command data phase must be 1 to 64 bytes long.
    InvalidDataLen,
}

/// Interface type of a command, as encoded in the controller's `*_IF_TYPE` fields. Names give
/// the number of lines used for the instruction, address and data phases.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IfType {
    /// 1-1-1
    Std = 0,
    /// 1-1-2
    Dual = 1,
    /// 1-2-2
    DualIo = 2,
    /// 1-1-4
    Quad = 5,
    /// 1-4-4
    QuadIo = 6,
}

impl IfType {
    /// Uses all four IO lines for data; the flash's QE bit has to be set.
    pub fn is_quad(self) -> bool {
        matches!(self, Self::Quad | Self::QuadIo)
    }
}

/// One read, write or erase command, as chosen for a particular flash.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiOperation {
    pub iftype: IfType,
    pub cmd: u8,
    /// Dummy bytes between the address and data phases.
    pub dummy: u8,
    /// Bytes per command. For erase, the block size.
    pub size: u32,
    /// Controller clock selector used while this command runs.
    pub clock: u32,
}

impl SpiOperation {
    pub const fn new(iftype: IfType, cmd: u8, dummy: u8, size: u32, clock: u32) -> Self {
        Self {
            iftype,
            cmd,
            dummy,
            size,
            clock,
        }
    }
}

/// Address bytes sent with each array command.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AddrCycle {
    Three = 3,
    /// Needed to reach past 16 MiB.
    Four = 4,
}

/// Direction of an upcoming bus or DMA transfer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusOp {
    Read,
    Write,
}

/// Command sequences for a family of flash parts. Every method defaults to the sequence that
/// works for most parts; a driver overrides only what its parts do differently.
pub trait SpiDriver: Sync {
    /// Block until the flash clears WIP.
    fn wait_ready(&self, host: &mut dyn Controller, spi: &Spi) -> Result<()> {
        general::wait_ready(host, spi)
    }

    fn write_enable(&self, host: &mut dyn Controller, spi: &Spi) -> Result<()> {
        general::write_enable(host, spi)
    }

    /// Enter (`enable`) or leave 4-byte address mode. Does nothing for 3-byte parts.
    fn entry_4addr(&self, host: &mut dyn Controller, spi: &Spi, enable: bool) -> Result<()> {
        general::entry_4addr(host, spi, enable)
    }

    /// Configure the controller for bus (memory-mapped) or DMA transfers.
    fn bus_prepare(&self, host: &mut dyn Controller, spi: &Spi, op: BusOp) -> Result<()> {
        general::bus_prepare(host, spi, op)
    }

    /// Set QE if the part is driven over four lines; clear it otherwise.
    fn qe_enable(&self, host: &mut dyn Controller, spi: &Spi) -> Result<()> {
        general::qe_enable(host, spi)
    }
}

/// An attached SPI-NOR flash.
#[derive(Clone, Copy)]
pub struct Spi {
    pub name: &'static str,
    pub chip_select: u8,
    /// In bytes.
    pub chip_size: u64,
    pub erase_size: u32,
    pub addr_cycle: AddrCycle,
    pub read: SpiOperation,
    pub write: SpiOperation,
    pub erase: SpiOperation,
    pub driver: &'static dyn SpiDriver,
}

impl Spi {
    /// Describe a flash on `chip_select`, using the SPI-general command sequences. Use
    /// `with_driver` for parts that need their own.
    pub fn new(
        name: &'static str,
        chip_select: u8,
        chip_size: u64,
        addr_cycle: AddrCycle,
        read: SpiOperation,
        write: SpiOperation,
        erase: SpiOperation,
    ) -> core::result::Result<Self, SpiError> {
        if chip_select > 1 {
            return Err(SpiError::InvalidChipSelect);
        }

        Ok(Self {
            name,
            chip_select,
            chip_size,
            erase_size: erase.size,
            addr_cycle,
            read,
            write,
            erase,
            driver: &General,
        })
    }

    pub fn with_driver(mut self, driver: &'static dyn SpiDriver) -> Self {
        self.driver = driver;
        self
    }

    /// Either the read or write command uses four data lines.
    pub fn is_quad(&self) -> bool {
        general::is_quad(self)
    }

    pub fn wait_ready(&self, host: &mut dyn Controller) -> Result<()> {
        self.driver.wait_ready(host, self)
    }

    pub fn write_enable(&self, host: &mut dyn Controller) -> Result<()> {
        self.driver.write_enable(host, self)
    }

    pub fn entry_4addr(&self, host: &mut dyn Controller, enable: bool) -> Result<()> {
        self.driver.entry_4addr(host, self, enable)
    }

    pub fn bus_prepare(&self, host: &mut dyn Controller, op: BusOp) -> Result<()> {
        self.driver.bus_prepare(host, self, op)
    }

    pub fn qe_enable(&self, host: &mut dyn Controller) -> Result<()> {
        self.driver.qe_enable(host, self)
    }
}

impl core::fmt::Debug for Spi {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Spi")
            .field("name", &self.name)
            .field("chip_select", &self.chip_select)
            .field("chip_size", &self.chip_size)
            .field("erase_size", &self.erase_size)
            .field("addr_cycle", &self.addr_cycle)
            .field("read", &self.read)
            .field("write", &self.write)
            .field("erase", &self.erase)
            .finish_non_exhaustive()
    }
}
