//! Register map of the HiSFC300 controller. Offsets are in bytes from the controller's register
//! base. Registers with fields share their name with a `register_bitfields!` module, so
//! `regs::CMD_CONFIG` is the offset and `regs::CMD_CONFIG::START` a field of it.

use tock_registers::{fields::FieldValue, register_bitfields};

/// Size of the command data buffer, in bytes.
pub const BUF_SIZE: usize = 64;

pub const GLOBAL_CONFIG: usize = 0x0100;
pub const TIMING: usize = 0x0110;
pub const INT_RAW_STATUS: usize = 0x0120;
pub const INT_STATUS: usize = 0x0124;
pub const INT_MASK: usize = 0x0128;
pub const INT_CLEAR: usize = 0x012C;
pub const BUS_CONFIG1: usize = 0x0200;
pub const BUS_CONFIG2: usize = 0x0204;
pub const BUS_FLASH_SIZE: usize = 0x0210;
pub const BUS_BASE_ADDR_CS0: usize = 0x0214;
pub const BUS_BASE_ADDR_CS1: usize = 0x0218;
pub const CMD_CONFIG: usize = 0x0300;
pub const CMD_INS: usize = 0x0308;
pub const CMD_ADDR: usize = 0x030C;
pub const CMD_DATABUF0: usize = 0x0400;

register_bitfields![u32,
    pub GLOBAL_CONFIG [
        SPI_MODE3 OFFSET(0) NUMBITS(1) [],
        WRITE_PROTECT OFFSET(1) NUMBITS(1) [],
        /// Bus accesses use 4-byte addresses.
        ADDR_MODE_4B OFFSET(2) NUMBITS(1) [],
        READ_DELAY OFFSET(3) NUMBITS(2) [],
    ],
    pub TIMING [
        /// Chip-select deselect time, in controller clock cycles.
        TSHSL OFFSET(0) NUMBITS(4) [],
        /// Chip-select setup time.
        TCSS OFFSET(8) NUMBITS(3) [],
        /// Chip-select hold time.
        TCSH OFFSET(12) NUMBITS(3) [],
    ],
    pub BUS_CONFIG1 [
        READ_IF_TYPE OFFSET(0) NUMBITS(3) [],
        READ_DUMMY_CNT OFFSET(3) NUMBITS(3) [],
        /// Number of prefetch lines on bus reads.
        READ_PREF_CNT OFFSET(6) NUMBITS(2) [],
        READ_INS OFFSET(8) NUMBITS(8) [],
        WRITE_IF_TYPE OFFSET(16) NUMBITS(3) [],
        WRITE_DUMMY_CNT OFFSET(19) NUMBITS(3) [],
        WRITE_INS OFFSET(22) NUMBITS(8) [],
        WRITE_EN OFFSET(30) NUMBITS(1) [],
        READ_EN OFFSET(31) NUMBITS(1) [],
    ],
    pub BUS_CONFIG2 [
        /// Bit position of WIP within the status register, for the controller's own polling.
        WIP_LOCATE OFFSET(0) NUMBITS(3) [],
    ],
    pub CMD_CONFIG [
        /// Set by software to launch a command; cleared by hardware when it completes.
        START OFFSET(0) NUMBITS(1) [],
        /// Chip select. Only bit 0 of the value is used.
        SEL_CS OFFSET(1) NUMBITS(1) [],
        ADDR_EN OFFSET(3) NUMBITS(1) [],
        DUMMY_CNT OFFSET(4) NUMBITS(3) [],
        DATA_EN OFFSET(7) NUMBITS(1) [],
        /// Data phase reads from the flash into the data buffer.
        RW_READ OFFSET(8) NUMBITS(1) [],
        /// Data phase length minus one. Use `data_cnt`.
        DATA_CNT OFFSET(9) NUMBITS(6) [],
        MEM_IF_TYPE OFFSET(17) NUMBITS(3) [],
    ],
];

/// Number of data bytes in a command's data phase, 1 through 64.
pub fn data_cnt(count: u32) -> FieldValue<u32, CMD_CONFIG::Register> {
    CMD_CONFIG::DATA_CNT.val(count.wrapping_sub(1))
}
