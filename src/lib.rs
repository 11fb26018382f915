//! Platform agnostic LSM303DLHC accelerometer and magnetometer driver over
//! I2C, built on the [embedded-hal] blocking I2C traits.
//!
//! The driver only deals in raw register values: acceleration and magnetic
//! field samples are returned as signed 16-bit counts.
//!
//! [embedded-hal]: https://docs.rs/embedded-hal
#![no_std]

mod conf;
mod interrupt;
mod register;

use core::fmt::Debug;

use embedded_hal as hal;

use hal::blocking::i2c::{Write, WriteRead};
use log::{debug, error, info, trace};

pub use accelerometer::{Error, ErrorKind, RawAccelerometer, vector::I16x3};

pub use conf::*;
pub use interrupt::*;
pub use register::{ACCEL_ADDR, AUTO_INCREMENT, MAG_ADDR};
use register::{AccelRegister, MagRegister, MD_CONTINUOUS};

/// LSM303DLHC driver
pub struct Lsm303dlhc<I2C> {
    i2c: I2C,
    config: Config,
}

impl<I2C, E> Lsm303dlhc<I2C>
    where
        I2C: WriteRead<Error = E> + Write<Error = E>,
        E: Debug
{
    /// Applies `config` to both the accelerometer and the magnetometer.
    ///
    /// An incomplete configuration is rejected with `ErrorKind::Param` before
    /// anything is sent on the bus. A bus error aborts the sequence; the
    /// registers written up to that point are not restored.
    pub fn new(i2c: I2C, config: &Config) -> Result<Self, Error<E>> {
        let settings = match config.settings() {
            Some(settings) => settings,
            None => {
                error!("LSM303DLHC configuration incomplete: {:?}", config);
                return Err(Error::new(ErrorKind::Param));
            }
        };

        let mut lsm303 = Lsm303dlhc {
            i2c,
            config: *config,
        };

        if let Err(e) = lsm303.apply(&settings) {
            error!("LSM303DLHC initialization failed: {:?}", e);
            return Err(e.into());
        }

        info!("LSM303DLHC initialized");
        Ok(lsm303)
    }

    fn apply(&mut self, settings: &Settings) -> Result<(), E> {
        self.write_accel_reg(AccelRegister::CTRL_REG1_A, settings.ctrl_reg1_a())?;
        self.write_accel_reg(AccelRegister::CTRL_REG4_A, settings.ctrl_reg4_a())?;
        self.write_mag_reg(MagRegister::CRA_REG_M, settings.cra_reg_m())?;
        self.write_mag_reg(MagRegister::CRB_REG_M, settings.crb_reg_m())?;
        self.write_mag_reg(MagRegister::MR_REG_M, MD_CONTINUOUS)
    }

    /// The configuration applied at initialization
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Destroy driver instance, return the I2C bus instance.
    /// The sensor keeps its current register state.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Raw acceleration, read in one auto-incremented burst from `OUT_X_L_A`
    pub fn acceleration(&mut self) -> Result<I16x3, Error<E>> {
        let mut bytes = [0u8; 6];
        let reg = AccelRegister::OUT_X_L_A.addr() | AUTO_INCREMENT;
        trace!("read {} bytes from accel register {:#04x}", bytes.len(), reg);
        self.i2c.write_read(ACCEL_ADDR, &[reg], &mut bytes)?;
        Ok(accel_x_y_z(&bytes))
    }

    /// Raw magnetic field, read in one burst from `OUT_X_H_M`.
    /// The magnetometer increments its register pointer on its own.
    pub fn magnetic_field(&mut self) -> Result<I16x3, Error<E>> {
        let mut bytes = [0u8; 6];
        let reg = MagRegister::OUT_X_H_M.addr();
        trace!("read {} bytes from mag register {:#04x}", bytes.len(), reg);
        self.i2c.write_read(MAG_ADDR, &[reg], &mut bytes)?;
        Ok(mag_x_y_z(&bytes))
    }

    /// Route interrupt sources to the INT1 pin, `CTRL_REG3_A`
    pub fn configure_int1_pin(&mut self, conf: &Int1PinConfig) -> Result<(), Error<E>> {
        debug!("INT1 pin routing {:?}", conf);
        self.write_accel_reg(AccelRegister::CTRL_REG3_A, conf.value())?;
        Ok(())
    }

    /// Route interrupt sources to the INT2 pin and set the interrupt polarity, `CTRL_REG6_A`
    pub fn configure_int2_pin(&mut self, conf: &Int2PinConfig) -> Result<(), Error<E>> {
        debug!("INT2 pin routing {:?}", conf);
        self.write_accel_reg(AccelRegister::CTRL_REG6_A, conf.value())?;
        Ok(())
    }

    /// Program an interrupt generator.
    ///
    /// Threshold and duration are written first, the `INTx_CFG_A` write arms the generator.
    /// The first failing write aborts the rest.
    pub fn configure_event(&mut self, generator: Generator, conf: &EventConfig) -> Result<(), Error<E>> {
        let regs = generator.registers();
        debug!("{:?} generator {:?}", generator, conf);
        self.write_accel_reg(regs.ths, conf.threshold_value())?;
        self.write_accel_reg(regs.duration, conf.duration_value())?;
        self.write_accel_reg(regs.cfg, conf.cfg_value())?;
        Ok(())
    }

    pub fn configure_int1_event(&mut self, conf: &EventConfig) -> Result<(), Error<E>> {
        self.configure_event(Generator::Int1, conf)
    }

    pub fn configure_int2_event(&mut self, conf: &EventConfig) -> Result<(), Error<E>> {
        self.configure_event(Generator::Int2, conf)
    }

    /// Read `INTx_SRC_A`. This clears the latched interrupt, two reads in a row
    /// will not return the same value.
    pub fn interrupt_source(&mut self, generator: Generator) -> Result<GeneratorSource, Error<E>> {
        let value = self.read_accel_reg(generator.registers().src)?;
        Ok(GeneratorSource::new(value))
    }

    pub fn int1_source(&mut self) -> Result<GeneratorSource, Error<E>> {
        self.interrupt_source(Generator::Int1)
    }

    pub fn int2_source(&mut self) -> Result<GeneratorSource, Error<E>> {
        self.interrupt_source(Generator::Int2)
    }

    fn write_accel_reg(&mut self, reg: AccelRegister, value: u8) -> Result<(), E> {
        trace!("write accel {:?} = {:#04x}", reg, value);
        self.i2c.write(ACCEL_ADDR, &[reg.addr(), value])
    }

    fn write_mag_reg(&mut self, reg: MagRegister, value: u8) -> Result<(), E> {
        trace!("write mag {:?} = {:#04x}", reg, value);
        self.i2c.write(MAG_ADDR, &[reg.addr(), value])
    }

    fn read_accel_reg(&mut self, reg: AccelRegister) -> Result<u8, E> {
        let mut buffer = [0u8; 1];
        self.i2c.write_read(ACCEL_ADDR, &[reg.addr()], &mut buffer)?;
        trace!("read accel {:?} = {:#04x}", reg, buffer[0]);
        Ok(buffer[0])
    }
}

/// X, Y, Z in register order, each axis little endian
fn accel_x_y_z(bytes: &[u8; 6]) -> I16x3 {
    let x = i16::from_le_bytes([bytes[0], bytes[1]]);
    let y = i16::from_le_bytes([bytes[2], bytes[3]]);
    let z = i16::from_le_bytes([bytes[4], bytes[5]]);
    I16x3::new(x, y, z)
}

/// Register order is X, Z, Y, each axis big endian
fn mag_x_y_z(bytes: &[u8; 6]) -> I16x3 {
    let x = i16::from_be_bytes([bytes[0], bytes[1]]);
    let z = i16::from_be_bytes([bytes[2], bytes[3]]);
    let y = i16::from_be_bytes([bytes[4], bytes[5]]);
    I16x3::new(x, y, z)
}

impl<I2C, E> RawAccelerometer<I16x3> for Lsm303dlhc<I2C>
    where
        I2C: WriteRead<Error = E> + Write<Error = E>,
        E: Debug
{
    type Error = E;

    /// Gets the raw acceleration vector from the accelerometer
    fn accel_raw(&mut self) -> Result<I16x3, Error<E>> {
        self.acceleration()
    }
}
