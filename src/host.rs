//! The HiSFC300 controller itself: register access, command completion, address mode and
//! clock control. Flash command sequences are written against the `Controller` trait, which
//! `Host` implements.

use embedded_hal::delay::DelayNs;
use tock_registers::LocalRegisterCopy;

use crate::{
    error::{Error, Result},
    fmt::{error, info, trace},
    regs::{self, CMD_CONFIG, GLOBAL_CONFIG, TIMING},
    spi::SpiOperation,
    traits::{RegisterAccess, SystemClock},
    util::bounded_loop,
};

/// A structure for specifying controller configuration.
#[derive(Copy, Clone, Debug)]
pub struct HostConfig {
    /// Number of polls of `CMD_CONFIG.START` before a command is considered hung.
    pub cmd_timeout: u32,
    /// Number of additional status register polls while waiting for the flash to go idle.
    /// The first poll is always made.
    pub ready_timeout: u32,
    /// Delay between status register polls, in µs.
    pub ready_poll_us: u32,
    /// Read status register 2 back after setting QE, and fail if it doesn't match.
    pub verify_qe: bool,
    /// Chip-select timing, in controller clock cycles. Written by `Host::init`.
    pub tshsl: u8,
    pub tcss: u8,
    pub tcsh: u8,
    /// Use SPI mode 3 (CPOL = CPHA = 1) instead of mode 0.
    pub spi_mode3: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            cmd_timeout: 0x1000_0000,
            // Roughly 40 seconds at one poll per µs; long enough for a full-chip erase.
            ready_timeout: 40 << 20,
            ready_poll_us: 1,
            verify_qe: false,
            tshsl: 0xF,
            tcss: 0x6,
            tcsh: 0x6,
            spi_mode3: true,
        }
    }
}

/// What a flash command sequence needs from the controller.
pub trait Controller {
    fn read_reg(&self, offset: usize) -> u32;

    fn write_reg(&mut self, offset: usize, value: u32);

    /// Wait for the controller to finish the command launched through `CMD_CONFIG`.
    fn wait_cpu_finish(&mut self) -> Result<()>;

    /// Switch the controller's bus accesses between 3 and 4-byte addresses. This must track
    /// the flash's own address mode.
    fn set_host_addr_mode(&mut self, enable: bool);

    /// Select the controller clock for `op`, and gate it on or off.
    fn set_system_clock(&mut self, op: &SpiOperation, enable: bool);

    fn delay_us(&mut self, us: u32);

    fn config(&self) -> &HostConfig;
}

/// Represents the HiSFC300 controller.
pub struct Host<R, C, D> {
    regs: R,
    clock: C,
    delay: D,
    pub cfg: HostConfig,
}

impl<R, C, D> Host<R, C, D>
where
    R: RegisterAccess,
    C: SystemClock,
    D: DelayNs,
{
    pub fn new(regs: R, clock: C, delay: D, cfg: HostConfig) -> Self {
        Self {
            regs,
            clock,
            delay,
            cfg,
        }
    }

    /// Program chip-select timing and the global mode. Leaves the controller in 3-byte address
    /// mode with write protection off.
    pub fn init(&mut self) {
        let timing = TIMING::TCSH.val(self.cfg.tcsh as u32)
            + TIMING::TCSS.val(self.cfg.tcss as u32)
            + TIMING::TSHSL.val(self.cfg.tshsl as u32);
        self.regs.write(regs::TIMING, timing.value);

        let mut global = self.global_config();
        global.modify(
            GLOBAL_CONFIG::SPI_MODE3.val(self.cfg.spi_mode3 as u32)
                + GLOBAL_CONFIG::WRITE_PROTECT::CLEAR
                + GLOBAL_CONFIG::ADDR_MODE_4B::CLEAR,
        );
        self.regs.write(regs::GLOBAL_CONFIG, global.get());

        info!("hisfc300: global config {=u32:#x}", global.get());
    }

    /// Check if the controller is still executing a command.
    pub fn is_busy(&self) -> bool {
        CMD_CONFIG::START.is_set(self.regs.read(regs::CMD_CONFIG))
    }

    /// Whether bus accesses currently use 4-byte addresses.
    pub fn addr_mode_4b(&self) -> bool {
        self.global_config().is_set(GLOBAL_CONFIG::ADDR_MODE_4B)
    }

    fn global_config(&self) -> LocalRegisterCopy<u32, GLOBAL_CONFIG::Register> {
        LocalRegisterCopy::new(self.regs.read(regs::GLOBAL_CONFIG))
    }

    fn poll_start(&self) -> Result<()> {
        bounded_loop!(
            self.is_busy(),
            Error::RegisterUnchanged,
            max: self.cfg.cmd_timeout
        );
        Ok(())
    }

    /// Give back the register block, clock and delay.
    pub fn release(self) -> (R, C, D) {
        (self.regs, self.clock, self.delay)
    }
}

impl<R, C, D> Controller for Host<R, C, D>
where
    R: RegisterAccess,
    C: SystemClock,
    D: DelayNs,
{
    fn read_reg(&self, offset: usize) -> u32 {
        self.regs.read(offset)
    }

    fn write_reg(&mut self, offset: usize, value: u32) {
        trace!("hisfc300: [{=usize:#x}] <- {=u32:#x}", offset, value);
        self.regs.write(offset, value);
    }

    fn wait_cpu_finish(&mut self) -> Result<()> {
        self.poll_start().inspect_err(|_| {
            error!("hisfc300: cmd wait cpu finish timeout");
        })
    }

    fn set_host_addr_mode(&mut self, enable: bool) {
        let mut global = self.global_config();
        global.modify(GLOBAL_CONFIG::ADDR_MODE_4B.val(enable as u32));
        self.regs.write(regs::GLOBAL_CONFIG, global.get());
    }

    fn set_system_clock(&mut self, op: &SpiOperation, enable: bool) {
        self.clock.set_clock(op.clock, enable);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn config(&self) -> &HostConfig {
        &self.cfg
    }
}
