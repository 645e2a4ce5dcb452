mod common;

use common::*;
use hisfc300::{
    error::Error,
    host::{Controller, HostConfig},
    regs::{self, CMD_CONFIG, GLOBAL_CONFIG},
    traits::RegisterAccess,
};

#[test]
fn init_programs_timing_and_mode() {
    let mut mock = MockRegs::new();
    mock.write(
        regs::GLOBAL_CONFIG,
        (GLOBAL_CONFIG::WRITE_PROTECT::SET
            + GLOBAL_CONFIG::ADDR_MODE_4B::SET
            + GLOBAL_CONFIG::READ_DELAY.val(2))
        .value,
    );
    let mut host = host_with(mock, HostConfig::default());

    host.init();

    assert_eq!(host.read_reg(regs::TIMING), 0x660F);
    assert_eq!(
        host.read_reg(regs::GLOBAL_CONFIG),
        (GLOBAL_CONFIG::SPI_MODE3::SET + GLOBAL_CONFIG::READ_DELAY.val(2)).value
    );
    assert!(!host.addr_mode_4b());
}

#[test]
fn init_mode0() {
    let cfg = HostConfig {
        spi_mode3: false,
        tshsl: 0x3,
        tcss: 0x1,
        tcsh: 0x2,
        ..HostConfig::default()
    };
    let mut host = host_with(MockRegs::new(), cfg);

    host.init();

    assert_eq!(host.read_reg(regs::GLOBAL_CONFIG), 0);
    assert_eq!(host.read_reg(regs::TIMING), 0x2103);
}

#[test]
fn addr_mode_toggles_only_its_bit() {
    let mut host = host();
    host.init();

    host.set_host_addr_mode(true);
    assert_eq!(
        host.read_reg(regs::GLOBAL_CONFIG),
        (GLOBAL_CONFIG::SPI_MODE3::SET + GLOBAL_CONFIG::ADDR_MODE_4B::SET).value
    );

    host.set_host_addr_mode(false);
    assert_eq!(
        host.read_reg(regs::GLOBAL_CONFIG),
        GLOBAL_CONFIG::SPI_MODE3::SET.value
    );
}

#[test]
fn cpu_finish_is_immediate_when_idle() {
    let mut host = host();
    assert!(!host.is_busy());
    assert_eq!(host.wait_cpu_finish(), Ok(()));
}

#[test]
fn cpu_finish_times_out() {
    let mut mock = MockRegs::new();
    mock.hang = true;
    let mut host = host_with(mock, test_config());

    host.write_reg(regs::CMD_CONFIG, CMD_CONFIG::START::SET.value);

    assert!(host.is_busy());
    assert_eq!(host.wait_cpu_finish(), Err(Error::RegisterUnchanged));
}

#[test]
fn system_clock_follows_operation() {
    let mut host = host();
    host.set_system_clock(&QUAD_READ, true);
    host.set_system_clock(&STD_WRITE, false);

    let (_, clock, _) = host.release();
    assert_eq!(clock.calls, vec![(3, true), (2, false)]);
}

#[test]
fn default_timeouts() {
    let cfg = HostConfig::default();
    assert_eq!(cfg.cmd_timeout, 0x1000_0000);
    assert_eq!(cfg.ready_timeout, 40 << 20);
    assert_eq!(cfg.ready_poll_us, 1);
    assert!(!cfg.verify_qe);
}
