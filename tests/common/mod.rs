//! A register-level model of the HiSFC300 with one flash attached, for driving the command
//! sequences on the host.

#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use hisfc300::{
    host::{Host, HostConfig},
    opcodes,
    regs::{self, CMD_CONFIG},
    spi::{AddrCycle, IfType, Spi, SpiOperation},
    traits::{RegisterAccess, SystemClock},
};

/// A command the controller was asked to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub ins: u8,
    pub config: u32,
    pub databuf: u32,
}

pub struct MockRegs {
    regs: [u32; 0x500 / 4],
    /// Every register write, in order.
    pub writes: Vec<(usize, u32)>,
    /// Every command launched through CMD_CONFIG.
    pub commands: Vec<Command>,
    /// RDSR reports WIP for this many more polls.
    pub busy_polls: u32,
    /// The controller never clears START.
    pub hang: bool,
    pub sr1: u8,
    pub sr2: u8,
    /// Writes to the status registers are dropped, as on a write-protected part.
    pub sr_locked: bool,
}

impl MockRegs {
    pub fn new() -> Self {
        Self {
            regs: [0; 0x500 / 4],
            writes: Vec::new(),
            commands: Vec::new(),
            busy_polls: 0,
            hang: false,
            sr1: 0,
            sr2: 0,
            sr_locked: false,
        }
    }

    pub fn get(&self, offset: usize) -> u32 {
        self.regs[offset / 4]
    }

    /// Launched command opcodes, in order.
    pub fn opcodes(&self) -> Vec<u8> {
        self.commands.iter().map(|c| c.ins).collect()
    }

    fn execute(&mut self, config: u32) {
        let ins = self.get(regs::CMD_INS) as u8;
        let databuf = self.get(regs::CMD_DATABUF0);
        self.commands.push(Command {
            ins,
            config,
            databuf,
        });

        let len = CMD_CONFIG::DATA_CNT.read(config) + 1;

        match ins {
            opcodes::RDSR => {
                let wip = if self.busy_polls > 0 {
                    self.busy_polls -= 1;
                    opcodes::SR_WIP as u8
                } else {
                    0
                };
                self.regs[regs::CMD_DATABUF0 / 4] = (self.sr1 | wip) as u32;
            }
            opcodes::RDSR2 => {
                self.regs[regs::CMD_DATABUF0 / 4] = self.sr2 as u32;
            }
            opcodes::WRSR if !self.sr_locked => {
                self.sr1 = databuf as u8;
                if len >= 2 {
                    self.sr2 = (databuf >> 8) as u8;
                }
            }
            _ => (),
        }
    }
}

impl RegisterAccess for MockRegs {
    fn read(&self, offset: usize) -> u32 {
        self.get(offset)
    }

    fn write(&mut self, offset: usize, value: u32) {
        self.writes.push((offset, value));

        if offset == regs::CMD_CONFIG && CMD_CONFIG::START.is_set(value) {
            self.execute(value);
            if !self.hang {
                self.regs[offset / 4] = CMD_CONFIG::START::CLEAR.modify(value);
                return;
            }
        }

        self.regs[offset / 4] = value;
    }
}

#[derive(Default)]
pub struct MockClock {
    pub calls: Vec<(u32, bool)>,
}

impl SystemClock for MockClock {
    fn set_clock(&mut self, clock: u32, enable: bool) {
        self.calls.push((clock, enable));
    }
}

#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: u32,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us * 1_000);
    }
}

pub type MockHost = Host<MockRegs, MockClock, MockDelay>;

/// Timeouts short enough that a stuck wait fails fast.
pub fn test_config() -> HostConfig {
    HostConfig {
        cmd_timeout: 100,
        ready_timeout: 50,
        ..HostConfig::default()
    }
}

pub fn host() -> MockHost {
    host_with(MockRegs::new(), test_config())
}

pub fn host_with(regs: MockRegs, cfg: HostConfig) -> MockHost {
    Host::new(regs, MockClock::default(), MockDelay::default(), cfg)
}

pub const STD_READ: SpiOperation = SpiOperation::new(IfType::Std, 0x03, 0, 0x100, 1);
pub const DUAL_READ: SpiOperation = SpiOperation::new(IfType::DualIo, 0xBB, 1, 0x100, 3);
pub const QUAD_READ: SpiOperation = SpiOperation::new(IfType::QuadIo, 0xEB, 2, 0x100, 3);
pub const STD_WRITE: SpiOperation = SpiOperation::new(IfType::Std, 0x02, 0, 0x100, 2);
pub const QUAD_WRITE: SpiOperation = SpiOperation::new(IfType::Quad, 0x32, 0, 0x100, 2);
pub const ERASE_64K: SpiOperation = SpiOperation::new(IfType::Std, 0xD8, 0, 0x1_0000, 2);

/// A 16 MiB part with single-line commands.
pub fn std_spi(chip_select: u8) -> Spi {
    Spi::new(
        "w25q128",
        chip_select,
        16 << 20,
        AddrCycle::Three,
        STD_READ,
        STD_WRITE,
        ERASE_64K,
    )
    .unwrap()
}

/// A 32 MiB part read and written over four lines.
pub fn quad_spi(chip_select: u8) -> Spi {
    Spi::new(
        "w25q256",
        chip_select,
        32 << 20,
        AddrCycle::Four,
        QUAD_READ,
        QUAD_WRITE,
        ERASE_64K,
    )
    .unwrap()
}
