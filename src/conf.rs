#![allow(non_camel_case_types)]

use crate::register::FS_MASK;

/// Accelerometer full scale selection, `CTRL_REG4_A`: `FS[1:0]`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccelFullScale {
    /// ±2 g
    G2 = 0b00,
    /// ±4 g
    G4 = 0b01,
    /// ±8 g
    G8 = 0b10,
    /// ±16 g
    G16 = 0b11,
}

impl AccelFullScale {
    pub fn val(self) -> u8 {
        self as u8
    }

    /// Recover the full scale encoded in a `CTRL_REG4_A` value
    pub fn from_ctrl4(ctrl4: u8) -> AccelFullScale {
        match (ctrl4 & FS_MASK) >> 4 {
            0b00 => AccelFullScale::G2,
            0b01 => AccelFullScale::G4,
            0b10 => AccelFullScale::G8,
            _ => AccelFullScale::G16,
        }
    }
}

impl From<AccelFullScale> for f32 {
    fn from(fs: AccelFullScale) -> f32 {
        match fs {
            AccelFullScale::G2 => 2.0,
            AccelFullScale::G4 => 4.0,
            AccelFullScale::G8 => 8.0,
            AccelFullScale::G16 => 16.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Accelerometer output data rate (odr), normal mode, `CTRL_REG1_A`: `ODR[3:0]`
pub enum AccelOutputDataRate {
    /// Power down, no sampling
    PowerDown = 0b0000,
    ODR_1_HZ = 0b0001,
    ODR_10_HZ = 0b0010,
    ODR_25_HZ = 0b0011,
    ODR_50_HZ = 0b0100,
    ODR_100_HZ = 0b0101,
    ODR_200_HZ = 0b0110,
    ODR_400_HZ = 0b0111,
    ODR_1344_HZ = 0b1001,
}

impl AccelOutputDataRate {
    pub fn val(self) -> u8 {
        self as u8
    }
}

impl From<AccelOutputDataRate> for f32 {
    fn from(rate: AccelOutputDataRate) -> f32 {
        match rate {
            AccelOutputDataRate::PowerDown => 0.0,
            AccelOutputDataRate::ODR_1_HZ => 1.0,
            AccelOutputDataRate::ODR_10_HZ => 10.0,
            AccelOutputDataRate::ODR_25_HZ => 25.0,
            AccelOutputDataRate::ODR_50_HZ => 50.0,
            AccelOutputDataRate::ODR_100_HZ => 100.0,
            AccelOutputDataRate::ODR_200_HZ => 200.0,
            AccelOutputDataRate::ODR_400_HZ => 400.0,
            AccelOutputDataRate::ODR_1344_HZ => 1344.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Magnetometer output data rate, `CRA_REG_M`: `DO[2:0]`
pub enum MagOutputDataRate {
    ODR_0d75_HZ = 0b000,
    ODR_1d5_HZ = 0b001,
    ODR_3_HZ = 0b010,
    ODR_7d5_HZ = 0b011,
    ODR_15_HZ = 0b100,
    ODR_30_HZ = 0b101,
    ODR_75_HZ = 0b110,
    ODR_220_HZ = 0b111,
}

impl MagOutputDataRate {
    pub fn val(self) -> u8 {
        self as u8
    }
}

impl From<MagOutputDataRate> for f32 {
    fn from(rate: MagOutputDataRate) -> f32 {
        match rate {
            MagOutputDataRate::ODR_0d75_HZ => 0.75,
            MagOutputDataRate::ODR_1d5_HZ => 1.5,
            MagOutputDataRate::ODR_3_HZ => 3.0,
            MagOutputDataRate::ODR_7d5_HZ => 7.5,
            MagOutputDataRate::ODR_15_HZ => 15.0,
            MagOutputDataRate::ODR_30_HZ => 30.0,
            MagOutputDataRate::ODR_75_HZ => 75.0,
            MagOutputDataRate::ODR_220_HZ => 220.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Magnetometer gain, `CRB_REG_M`: `GN[2:0]`. Named after the sensor input range in gauss.
pub enum MagGain {
    _1d3_GAUSS = 0b001,
    _1d9_GAUSS = 0b010,
    _2d5_GAUSS = 0b011,
    _4d0_GAUSS = 0b100,
    _4d7_GAUSS = 0b101,
    _5d6_GAUSS = 0b110,
    _8d1_GAUSS = 0b111,
}

impl MagGain {
    pub fn val(self) -> u8 {
        self as u8
    }
}

impl From<MagGain> for f32 {
    fn from(gain: MagGain) -> f32 {
        match gain {
            MagGain::_1d3_GAUSS => 1.3,
            MagGain::_1d9_GAUSS => 1.9,
            MagGain::_2d5_GAUSS => 2.5,
            MagGain::_4d0_GAUSS => 4.0,
            MagGain::_4d7_GAUSS => 4.7,
            MagGain::_5d6_GAUSS => 5.6,
            MagGain::_8d1_GAUSS => 8.1,
        }
    }
}

/// LSM303DLHC configuration struct.
///
/// Every setting must be chosen before the configuration can be applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) accel_fs: Option<AccelFullScale>,
    pub(crate) accel_odr: Option<AccelOutputDataRate>,
    pub(crate) mag_odr: Option<MagOutputDataRate>,
    pub(crate) mag_gain: Option<MagGain>,
}

/// Configuration with every setting present, as written to the sensor
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) accel_fs: AccelFullScale,
    pub(crate) accel_odr: AccelOutputDataRate,
    pub(crate) mag_odr: MagOutputDataRate,
    pub(crate) mag_gain: MagGain,
}

impl Config {
    /// Creates a new configuration object with nothing selected
    pub fn new() -> Self {
        Config {
            accel_fs: None,
            accel_odr: None,
            mag_odr: None,
            mag_gain: None,
        }
    }

    /// Sets the accelerometer full scale
    pub fn accel_fs(&mut self, fs: AccelFullScale) -> &mut Self {
        self.accel_fs = Some(fs);
        self
    }

    /// Sets the accelerometer output data rate.
    /// `PowerDown` leaves the accelerometer disabled.
    pub fn accel_odr(&mut self, odr: AccelOutputDataRate) -> &mut Self {
        self.accel_odr = Some(odr);
        self
    }

    /// Sets the magnetometer output data rate
    pub fn mag_odr(&mut self, odr: MagOutputDataRate) -> &mut Self {
        self.mag_odr = Some(odr);
        self
    }

    /// Sets the magnetometer gain
    pub fn mag_gain(&mut self, gain: MagGain) -> &mut Self {
        self.mag_gain = Some(gain);
        self
    }

    pub fn get_accel_fs(&self) -> Option<AccelFullScale> {
        self.accel_fs
    }

    pub fn get_accel_odr(&self) -> Option<AccelOutputDataRate> {
        self.accel_odr
    }

    pub fn get_mag_odr(&self) -> Option<MagOutputDataRate> {
        self.mag_odr
    }

    pub fn get_mag_gain(&self) -> Option<MagGain> {
        self.mag_gain
    }

    /// `None` as soon as one setting is missing
    pub(crate) fn settings(&self) -> Option<Settings> {
        Some(Settings {
            accel_fs: self.accel_fs?,
            accel_odr: self.accel_odr?,
            mag_odr: self.mag_odr?,
            mag_gain: self.mag_gain?,
        })
    }
}

impl Settings {
    /// `CTRL_REG1_A`: ODR in the high nibble, X, Y and Z always enabled
    pub(crate) fn ctrl_reg1_a(&self) -> u8 {
        use crate::register::{XEN, YEN, ZEN};
        (self.accel_odr.val() << 4) | ZEN | YEN | XEN
    }

    /// `CTRL_REG4_A`: block data update and high resolution always on
    pub(crate) fn ctrl_reg4_a(&self) -> u8 {
        use crate::register::{BDU, HR};
        BDU | HR | (self.accel_fs.val() << 4)
    }

    /// `CRA_REG_M`: temperature sensor off
    pub(crate) fn cra_reg_m(&self) -> u8 {
        self.mag_odr.val() << 2
    }

    pub(crate) fn crb_reg_m(&self) -> u8 {
        self.mag_gain.val() << 5
    }
}
