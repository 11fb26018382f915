use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use embedded_hal_mock::MockError;
use std::io::ErrorKind as IoErrorKind;

use lsm303dlhc_int::*;

fn config() -> Config {
    let mut config = Config::new();
    config
        .accel_fs(AccelFullScale::G8)
        .accel_odr(AccelOutputDataRate::ODR_100_HZ)
        .mag_odr(MagOutputDataRate::ODR_15_HZ)
        .mag_gain(MagGain::_1d3_GAUSS);
    config
}

fn init_transactions() -> Vec<I2cTrans> {
    vec![
        I2cTrans::write(ACCEL_ADDR, vec![0x20, 0x57]),
        I2cTrans::write(ACCEL_ADDR, vec![0x23, 0xA8]),
        I2cTrans::write(MAG_ADDR, vec![0x00, 0x10]),
        I2cTrans::write(MAG_ADDR, vec![0x01, 0x20]),
        I2cTrans::write(MAG_ADDR, vec![0x02, 0x00]),
    ]
}

fn bus_error() -> MockError {
    MockError::Io(IoErrorKind::Other)
}

fn new_sensor(extra: &[I2cTrans]) -> Lsm303dlhc<I2cMock> {
    let mut expectations = init_transactions();
    expectations.extend_from_slice(extra);
    let i2c = I2cMock::new(&expectations);
    Lsm303dlhc::new(i2c, &config()).unwrap()
}

#[test]
fn init_writes_both_subsystems_in_order() {
    let sensor = new_sensor(&[]);
    assert_eq!(sensor.config(), &config());
    sensor.destroy().done();
}

#[test]
fn init_with_incomplete_config_touches_nothing() {
    let mut i2c = I2cMock::new(&[]);
    let mut partial = Config::new();
    partial
        .accel_fs(AccelFullScale::G2)
        .accel_odr(AccelOutputDataRate::ODR_10_HZ)
        .mag_odr(MagOutputDataRate::ODR_3_HZ);

    let err = Lsm303dlhc::new(i2c.clone(), &partial).err().unwrap();
    assert!(matches!(err.kind(), ErrorKind::Param));

    let err = Lsm303dlhc::new(i2c.clone(), &Config::new()).err().unwrap();
    assert!(matches!(err.kind(), ErrorKind::Param));
    i2c.done();
}

#[test]
fn init_aborts_on_first_bus_error() {
    for failing in 0..5 {
        let mut expectations = init_transactions();
        expectations.truncate(failing + 1);
        let last = expectations.pop().unwrap().with_error(bus_error());
        expectations.push(last);

        let mut i2c = I2cMock::new(&expectations);
        let result = Lsm303dlhc::new(i2c.clone(), &config());
        match result {
            Ok(_) => panic!("step {} should have failed", failing),
            Err(e) => assert!(matches!(e.kind(), ErrorKind::Bus)),
        }
        i2c.done();
    }
}

#[test]
fn init_power_down_and_full_scale_16g() {
    let mut config = config();
    config
        .accel_odr(AccelOutputDataRate::PowerDown)
        .accel_fs(AccelFullScale::G16)
        .mag_odr(MagOutputDataRate::ODR_220_HZ)
        .mag_gain(MagGain::_8d1_GAUSS);
    let expectations = [
        I2cTrans::write(ACCEL_ADDR, vec![0x20, 0x07]),
        I2cTrans::write(ACCEL_ADDR, vec![0x23, 0xB8]),
        I2cTrans::write(MAG_ADDR, vec![0x00, 0x1C]),
        I2cTrans::write(MAG_ADDR, vec![0x01, 0xE0]),
        I2cTrans::write(MAG_ADDR, vec![0x02, 0x00]),
    ];
    let i2c = I2cMock::new(&expectations);
    let sensor = Lsm303dlhc::new(i2c, &config).unwrap();
    sensor.destroy().done();
}

#[test]
fn read_acceleration() {
    let mut sensor = new_sensor(&[I2cTrans::write_read(
        ACCEL_ADDR,
        vec![0xA8],
        vec![0x34, 0x12, 0x78, 0x56, 0xBC, 0x9A],
    )]);
    let accel = sensor.acceleration().unwrap();
    assert_eq!(accel, I16x3::new(0x1234, 0x5678, 0x9ABCu16 as i16));
    sensor.destroy().done();
}

#[test]
fn read_acceleration_through_raw_accelerometer() {
    let mut sensor = new_sensor(&[I2cTrans::write_read(
        ACCEL_ADDR,
        vec![0xA8],
        vec![0x00, 0x40, 0x00, 0x00, 0x00, 0xC0],
    )]);
    let accel = sensor.accel_raw().unwrap();
    assert_eq!(accel, I16x3::new(0x4000, 0, -0x4000));
    sensor.destroy().done();
}

#[test]
fn read_magnetic_field() {
    let mut sensor = new_sensor(&[I2cTrans::write_read(
        MAG_ADDR,
        vec![0x03],
        vec![0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC],
    )]);
    let mag = sensor.magnetic_field().unwrap();
    assert_eq!(mag.x, 0x1234);
    assert_eq!(mag.y, 0x9ABCu16 as i16);
    assert_eq!(mag.z, 0x5678);
    sensor.destroy().done();
}

#[test]
fn read_errors_are_propagated() {
    let mut sensor = new_sensor(&[
        I2cTrans::write_read(ACCEL_ADDR, vec![0xA8], vec![0; 6]).with_error(bus_error()),
        I2cTrans::write_read(MAG_ADDR, vec![0x03], vec![0; 6]).with_error(bus_error()),
    ]);
    let err = sensor.acceleration().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Bus));
    let err = sensor.magnetic_field().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Bus));
    sensor.destroy().done();
}

#[test]
fn configure_interrupt_pins() {
    let mut sensor = new_sensor(&[
        I2cTrans::write(ACCEL_ADDR, vec![0x22, 0b0100_0000]),
        I2cTrans::write(ACCEL_ADDR, vec![0x25, 0b0010_1010]),
    ]);
    sensor
        .configure_int1_pin(&Int1PinConfig { aoi1: true, ..Default::default() })
        .unwrap();
    sensor
        .configure_int2_pin(&Int2PinConfig {
            int2: true,
            p2_act: true,
            active_low: true,
            ..Default::default()
        })
        .unwrap();
    sensor.destroy().done();
}

#[test]
fn configure_pin_rewrites_same_value() {
    let mut sensor = new_sensor(&[
        I2cTrans::write(ACCEL_ADDR, vec![0x22, 0b1000_0000]),
        I2cTrans::write(ACCEL_ADDR, vec![0x22, 0b1000_0000]),
    ]);
    let conf = Int1PinConfig { click: true, ..Default::default() };
    sensor.configure_int1_pin(&conf).unwrap();
    sensor.configure_int1_pin(&conf).unwrap();
    sensor.destroy().done();
}

#[test]
fn configure_events_write_threshold_and_duration_first() {
    let conf = EventConfig {
        and_combination: true,
        z_high: true,
        threshold: 200,
        duration: 200,
        ..Default::default()
    };
    let mut sensor = new_sensor(&[
        I2cTrans::write(ACCEL_ADDR, vec![0x32, 0x48]),
        I2cTrans::write(ACCEL_ADDR, vec![0x33, 0x48]),
        I2cTrans::write(ACCEL_ADDR, vec![0x30, 0b1010_0000]),
        I2cTrans::write(ACCEL_ADDR, vec![0x36, 0x48]),
        I2cTrans::write(ACCEL_ADDR, vec![0x37, 0x48]),
        I2cTrans::write(ACCEL_ADDR, vec![0x34, 0b1010_0000]),
    ]);
    sensor.configure_int1_event(&conf).unwrap();
    sensor.configure_int2_event(&conf).unwrap();
    sensor.destroy().done();
}

#[test]
fn configure_event_aborts_on_first_bus_error() {
    let conf = EventConfig { x_high: true, threshold: 16, duration: 1, ..Default::default() };
    let mut sensor = new_sensor(&[
        I2cTrans::write(ACCEL_ADDR, vec![0x36, 16]).with_error(bus_error()),
        I2cTrans::write(ACCEL_ADDR, vec![0x32, 16]),
        I2cTrans::write(ACCEL_ADDR, vec![0x33, 1]).with_error(bus_error()),
    ]);
    let err = sensor.configure_event(Generator::Int2, &conf).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Bus));
    let err = sensor.configure_event(Generator::Int1, &conf).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Bus));
    sensor.destroy().done();
}

#[test]
fn interrupt_source_reads_each_time() {
    let mut sensor = new_sensor(&[
        I2cTrans::write_read(ACCEL_ADDR, vec![0x31], vec![0b0110_0000]),
        I2cTrans::write_read(ACCEL_ADDR, vec![0x31], vec![0x00]),
        I2cTrans::write_read(ACCEL_ADDR, vec![0x35], vec![0b0100_0001]),
    ]);
    let src = sensor.int1_source().unwrap();
    assert!(src.active());
    assert!(src.z_high());

    let src = sensor.int1_source().unwrap();
    assert_eq!(src.value, 0);
    assert!(!src.active());

    let src = sensor.int2_source().unwrap();
    assert!(src.active());
    assert!(src.x_low());
    sensor.destroy().done();
}

#[test]
fn interrupt_source_error_is_propagated() {
    let mut sensor = new_sensor(&[
        I2cTrans::write_read(ACCEL_ADDR, vec![0x35], vec![0x00]).with_error(bus_error()),
    ]);
    let err = sensor.interrupt_source(Generator::Int2).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Bus));
    sensor.destroy().done();
}
