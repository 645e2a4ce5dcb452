//! Command sequencing for SPI-NOR flash behind the Hisilicon HiSFC300 controller.
//!
//! The controller runs one flash command at a time: software loads an opcode into `CMD_INS`,
//! optional data into the data buffer, then launches it by writing `CMD_CONFIG` with `START`
//! set, and polls until hardware clears `START`. On top of that this crate provides the
//! sequences the MTD layer needs before it can erase, program or read: waiting for the flash to
//! go idle, write enable, 4-byte address mode, bus read setup, and the quad-enable bit.
//!
//! ```no_run
//! use hisfc300::{
//!     host::{Host, HostConfig},
//!     mmio::Mmio,
//!     spi::{AddrCycle, BusOp, IfType, Spi, SpiOperation},
//!     traits::FixedClock,
//! };
//! # fn run(delay: impl embedded_hal::delay::DelayNs) -> hisfc300::error::Result<()> {
//! let regs = unsafe { Mmio::new(0x1001_0000) };
//! let mut host = Host::new(regs, FixedClock, delay, HostConfig::default());
//! host.init();
//!
//! let spi = Spi::new(
//!     "w25q256",
//!     0,
//!     32 << 20,
//!     AddrCycle::Four,
//!     SpiOperation::new(IfType::QuadIo, 0xEB, 2, 0x100, 0),
//!     SpiOperation::new(IfType::Quad, 0x32, 0, 0x100, 0),
//!     SpiOperation::new(IfType::Std, 0xD8, 0, 0x1_0000, 0),
//! )?;
//!
//! spi.qe_enable(&mut host)?;
//! spi.entry_4addr(&mut host, true)?;
//! spi.bus_prepare(&mut host, BusOp::Read)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), no_std)]

mod fmt;
mod util;

pub mod error;
pub mod general;
pub mod host;
pub mod macronix;
pub mod mmio;
pub mod opcodes;
pub mod regs;
pub mod spi;
pub mod traits;

pub use crate::{
    error::{Error, Result},
    host::{Controller, Host, HostConfig},
    spi::{Spi, SpiDriver},
};
