//! SPI-NOR command opcodes and status register bits used by the command sequences.

/// Write Enable. Sets WEL; required before any write to the array or status registers.
pub const WREN: u8 = 0x06;
/// Read Status Register 1
pub const RDSR: u8 = 0x05;
/// Read Status Register 2
pub const RDSR2: u8 = 0x35;
/// Write Status Register. One byte writes SR1; two bytes write SR1 then SR2.
pub const WRSR: u8 = 0x01;
/// Enter 4-byte address mode
pub const EN4B: u8 = 0xB7;
/// Exit 4-byte address mode
pub const EX4B: u8 = 0xE9;

/// Write In Progress
pub const SR_WIP: u32 = 0x01;

/// Two-byte WRSR payload setting QE (status register 2, bit 1). The data buffer is sent low
/// byte first, so SR1 is written as zero.
pub const SR_QE: u32 = 1 << 9;
/// Two-byte WRSR payload with QE cleared.
pub const SR_XQE: u32 = 0;

/// QE as read back through RDSR2.
pub const SR2_QE: u32 = 0x02;

/// QE on parts that keep it in status register 1, bit 6 (Macronix).
pub const SR1_QE_MX: u32 = 0x40;
