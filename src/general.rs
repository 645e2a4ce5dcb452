//! SPI-general command sequences: the commands nearly every SPI-NOR part shares. Each one
//! loads an opcode into `CMD_INS`, launches it through `CMD_CONFIG`, and waits for the
//! controller to clear `START`.

use crate::{
    error::Result,
    fmt::{debug, error},
    host::Controller,
    opcodes,
    regs::{self, BUS_CONFIG1, BUS_CONFIG2, CMD_CONFIG},
    spi::{AddrCycle, BusOp, Spi, SpiDriver, SpiError},
};

/// The driver for parts with no quirks.
#[derive(Clone, Copy, Debug, Default)]
pub struct General;

impl SpiDriver for General {}

/// Issue `cmd` with a `len`-byte read data phase, and return the first word of the data buffer.
/// Status registers come back low byte first.
pub fn read_status(host: &mut dyn Controller, spi: &Spi, cmd: u8, len: u32) -> Result<u32> {
    if len == 0 || len as usize > regs::BUF_SIZE {
        return Err(SpiError::InvalidDataLen.into());
    }

    host.write_reg(regs::CMD_INS, cmd as u32);
    host.write_reg(
        regs::CMD_CONFIG,
        (CMD_CONFIG::SEL_CS.val(spi.chip_select as u32)
            + regs::data_cnt(len)
            + CMD_CONFIG::DATA_EN::SET
            + CMD_CONFIG::RW_READ::SET
            + CMD_CONFIG::START::SET)
            .value,
    );
    host.wait_cpu_finish()?;

    Ok(host.read_reg(regs::CMD_DATABUF0))
}

/// Poll status register 1 until WIP clears.
pub fn wait_ready(host: &mut dyn Controller, spi: &Spi) -> Result<()> {
    let cfg = *host.config();

    for _ in 0..=cfg.ready_timeout {
        let status = read_status(host, spi, opcodes::RDSR, 1)?;
        if status & opcodes::SR_WIP == 0 {
            return Ok(());
        }
        host.delay_us(cfg.ready_poll_us);
    }

    error!("hisfc300: wait spi flash ready timeout");

    Err(SpiError::ReadyTimeout.into())
}

pub fn write_enable(host: &mut dyn Controller, spi: &Spi) -> Result<()> {
    host.write_reg(regs::CMD_INS, opcodes::WREN as u32);
    host.write_reg(
        regs::CMD_CONFIG,
        (CMD_CONFIG::SEL_CS.val(spi.chip_select as u32) + CMD_CONFIG::START::SET).value,
    );
    host.wait_cpu_finish()
}

/// Parts over 16 MiB need 4-byte addresses, and the controller's address mode has to follow
/// the flash's. 3-byte parts are left alone.
pub fn entry_4addr(host: &mut dyn Controller, spi: &Spi, enable: bool) -> Result<()> {
    if spi.addr_cycle != AddrCycle::Four {
        return Ok(());
    }

    let cmd = if enable { opcodes::EN4B } else { opcodes::EX4B };
    host.write_reg(regs::CMD_INS, cmd as u32);
    host.write_reg(
        regs::CMD_CONFIG,
        (CMD_CONFIG::SEL_CS.val(spi.chip_select as u32) + CMD_CONFIG::START::SET).value,
    );
    host.wait_cpu_finish()?;

    host.set_host_addr_mode(enable);

    Ok(())
}

/// Set up bus reads with the flash's read command. Bus writes aren't used; a write prepare
/// clears the bus configuration instead.
pub fn bus_prepare(host: &mut dyn Controller, spi: &Spi, op: BusOp) -> Result<()> {
    let regval = match op {
        BusOp::Read => {
            (BUS_CONFIG1::READ_EN::SET
                + BUS_CONFIG1::READ_PREF_CNT.val(0)
                + BUS_CONFIG1::READ_INS.val(spi.read.cmd as u32)
                + BUS_CONFIG1::READ_DUMMY_CNT.val(spi.read.dummy as u32)
                + BUS_CONFIG1::READ_IF_TYPE.val(spi.read.iftype as u32))
            .value
        }
        BusOp::Write => 0,
    };

    host.write_reg(regs::BUS_CONFIG1, regval);
    host.write_reg(regs::BUS_CONFIG2, BUS_CONFIG2::WIP_LOCATE.val(0).value);

    // Bus transfers run at the read command's clock, whichever the direction.
    host.set_system_clock(&spi.read, true);

    Ok(())
}

/// Whether the part is driven over four data lines, for either reads or writes.
pub fn is_quad(spi: &Spi) -> bool {
    if spi.write.iftype.is_quad() || spi.read.iftype.is_quad() {
        debug!("hisfc300: {=str} is 4r4w", spi.name);
        return true;
    }
    debug!("hisfc300: {=str} is 2r2w or 1r1w", spi.name);
    false
}

/// Write QE to match whether the part is used in quad mode. The write enable and ready wait go
/// through the part's driver.
pub fn qe_enable(host: &mut dyn Controller, spi: &Spi) -> Result<()> {
    let quad = is_quad(spi);
    let qe_op = if quad { opcodes::SR_QE } else { opcodes::SR_XQE };

    spi.driver.write_enable(host, spi)?;

    host.write_reg(regs::CMD_INS, opcodes::WRSR as u32);
    host.write_reg(regs::CMD_DATABUF0, qe_op);
    host.write_reg(
        regs::CMD_CONFIG,
        (CMD_CONFIG::MEM_IF_TYPE.val(spi.write.iftype as u32)
            + regs::data_cnt(2)
            + CMD_CONFIG::DATA_EN::SET
            + CMD_CONFIG::DUMMY_CNT.val(spi.write.dummy as u32)
            + CMD_CONFIG::SEL_CS.val(spi.chip_select as u32)
            + CMD_CONFIG::START::SET)
            .value,
    );
    host.wait_cpu_finish()?;

    spi.driver.wait_ready(host, spi)?;

    if host.config().verify_qe {
        verify_qe(host, spi, quad)?;
    }

    Ok(())
}

/// Read status register 2 back and check QE against what was written.
fn verify_qe(host: &mut dyn Controller, spi: &Spi, quad: bool) -> Result<()> {
    let sr2 = read_status(host, spi, opcodes::RDSR2, 2)?;
    debug!("hisfc300: QE readback {=u32:#x}", sr2);

    if (sr2 & opcodes::SR2_QE != 0) != quad {
        error!("hisfc300: QE bit update failed on {=str}", spi.name);
        return Err(SpiError::QeMismatch.into());
    }

    Ok(())
}
