//! Macronix parts (MX25L, MX66L) keep QE in status register 1, bit 6, and have no status
//! register 2; WRSR takes a single byte.

use crate::{
    error::Result,
    general,
    host::Controller,
    opcodes,
    regs::{self, CMD_CONFIG},
    spi::{Spi, SpiDriver},
};

#[derive(Clone, Copy, Debug, Default)]
pub struct Macronix;

impl SpiDriver for Macronix {
    fn qe_enable(&self, host: &mut dyn Controller, spi: &Spi) -> Result<()> {
        let qe_op = if general::is_quad(spi) {
            opcodes::SR1_QE_MX
        } else {
            0
        };

        self.write_enable(host, spi)?;

        host.write_reg(regs::CMD_INS, opcodes::WRSR as u32);
        host.write_reg(regs::CMD_DATABUF0, qe_op);
        host.write_reg(
            regs::CMD_CONFIG,
            (CMD_CONFIG::MEM_IF_TYPE.val(spi.write.iftype as u32)
                + regs::data_cnt(1)
                + CMD_CONFIG::DATA_EN::SET
                + CMD_CONFIG::DUMMY_CNT.val(spi.write.dummy as u32)
                + CMD_CONFIG::SEL_CS.val(spi.chip_select as u32)
                + CMD_CONFIG::START::SET)
                .value,
        );
        host.wait_cpu_finish()?;

        self.wait_ready(host, spi)
    }
}
