//! LSM303DLHC register addresses
#![allow(non_camel_case_types)]

/// Accelerometer I2C address
pub const ACCEL_ADDR: u8 = 0x19;
/// Magnetometer I2C address
pub const MAG_ADDR: u8 = 0x1E;

/// MSB of the sub-address enables register auto-increment on the accelerometer
pub const AUTO_INCREMENT: u8 = 0x80;

/// Accelerometer registers
#[allow(dead_code)]
#[derive(Copy, Clone, Debug)]
#[repr(u8)]
pub enum AccelRegister {
    CTRL_REG1_A         = 0x20,
    CTRL_REG3_A         = 0x22,
    CTRL_REG4_A         = 0x23,
    CTRL_REG6_A         = 0x25,
    OUT_X_L_A           = 0x28,
    INT1_CFG_A          = 0x30,
    INT1_SRC_A          = 0x31,
    INT1_THS_A          = 0x32,
    INT1_DURATION_A     = 0x33,
    INT2_CFG_A          = 0x34,
    INT2_SRC_A          = 0x35,
    INT2_THS_A          = 0x36,
    INT2_DURATION_A     = 0x37,
}

impl AccelRegister {
    /// Get register address
    pub fn addr(self) -> u8 {
        self as u8
    }
}

/// Magnetometer registers
#[allow(dead_code)]
#[derive(Copy, Clone, Debug)]
#[repr(u8)]
pub enum MagRegister {
    CRA_REG_M   = 0x00,
    CRB_REG_M   = 0x01,
    MR_REG_M    = 0x02,
    OUT_X_H_M   = 0x03,
}

impl MagRegister {
    /// Get register address
    pub fn addr(self) -> u8 {
        self as u8
    }
}

// CTRL_REG1_A
pub const XEN: u8 = 0b0000_0001;
pub const YEN: u8 = 0b0000_0010;
pub const ZEN: u8 = 0b0000_0100;

// CTRL_REG4_A
pub const BDU: u8 = 0b1000_0000;
pub const HR: u8 = 0b0000_1000;
pub const FS_MASK: u8 = 0b0011_0000;

// MR_REG_M
pub const MD_CONTINUOUS: u8 = 0b0000_0000;

/// Threshold and duration registers only hold 7 bits
pub const SEVEN_BIT_MASK: u8 = 0b0111_1111;
