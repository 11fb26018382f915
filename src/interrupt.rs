//! Interrupt pin routing, interrupt generators and their source registers

use crate::register::{AccelRegister, SEVEN_BIT_MASK};

// CTRL_REG3_A, bit 0 reserved
const I1_CLICK: u8 = 1 << 7;
const I1_AOI1: u8 = 1 << 6;
const I1_AOI2: u8 = 1 << 5;
const I1_DRDY1: u8 = 1 << 4;
const I1_DRDY2: u8 = 1 << 3;
const I1_WTM: u8 = 1 << 2;
const I1_OVERRUN: u8 = 1 << 1;
const CTRL_REG3_A_RESERVED: u8 = 1 << 0;

// CTRL_REG6_A, bits 2 and 0 reserved
const I2_CLICK: u8 = 1 << 7;
const I2_INT1: u8 = 1 << 6;
const I2_INT2: u8 = 1 << 5;
const BOOT_I1: u8 = 1 << 4;
const P2_ACT: u8 = 1 << 3;
const H_LACTIVE: u8 = 1 << 1;
const CTRL_REG6_A_RESERVED: u8 = (1 << 2) | (1 << 0);

// INTx_CFG_A
const AOI: u8 = 1 << 7;
const SIX_D: u8 = 1 << 6;
const ZHIE: u8 = 1 << 5;
const ZLIE: u8 = 1 << 4;
const YHIE: u8 = 1 << 3;
const YLIE: u8 = 1 << 2;
const XHIE: u8 = 1 << 1;
const XLIE: u8 = 1 << 0;

// INTx_SRC_A
const IA: u8 = 1 << 6;
const ZH: u8 = 1 << 5;
const ZL: u8 = 1 << 4;
const YH: u8 = 1 << 3;
const YL: u8 = 1 << 2;
const XH: u8 = 1 << 1;
const XL: u8 = 1 << 0;

const INT1_PIN_BITS: [u8; 7] = [I1_CLICK, I1_AOI1, I1_AOI2, I1_DRDY1, I1_DRDY2, I1_WTM, I1_OVERRUN];
const INT2_PIN_BITS: [u8; 6] = [I2_CLICK, I2_INT1, I2_INT2, BOOT_I1, P2_ACT, H_LACTIVE];
const EVENT_BITS: [u8; 8] = [AOI, SIX_D, ZHIE, ZLIE, YHIE, YLIE, XHIE, XLIE];

const fn union(bits: &[u8]) -> u8 {
    let mut acc = 0;
    let mut i = 0;
    while i < bits.len() {
        acc |= bits[i];
        i += 1;
    }
    acc
}

const _: () = assert!(union(&INT1_PIN_BITS) & CTRL_REG3_A_RESERVED == 0);
const _: () = assert!(union(&INT2_PIN_BITS) & CTRL_REG6_A_RESERVED == 0);
const _: () = assert!(union(&EVENT_BITS) == 0xFF);

fn pack(flags: &[bool], bits: &[u8]) -> u8 {
    let mut value = 0;
    for (&set, &bit) in flags.iter().zip(bits.iter()) {
        if set {
            value |= bit;
        }
    }
    value
}

/// Event sources routed to the INT1 pin, `CTRL_REG3_A`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Int1PinConfig {
    /// CLICK interrupt
    pub click: bool,
    /// Interrupt generator 1 (AOI1)
    pub aoi1: bool,
    /// Interrupt generator 2 (AOI2)
    pub aoi2: bool,
    /// DRDY1 data ready
    pub drdy1: bool,
    /// DRDY2 data ready
    pub drdy2: bool,
    /// FIFO watermark
    pub wtm: bool,
    /// FIFO overrun
    pub overrun: bool,
}

impl Int1PinConfig {
    /// Register value, bit 0 is always clear
    pub fn value(&self) -> u8 {
        let flags = [
            self.click,
            self.aoi1,
            self.aoi2,
            self.drdy1,
            self.drdy2,
            self.wtm,
            self.overrun,
        ];
        pack(&flags, &INT1_PIN_BITS)
    }
}

/// Event sources routed to the INT2 pin plus the interrupt polarity, `CTRL_REG6_A`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Int2PinConfig {
    /// CLICK interrupt
    pub click: bool,
    /// Interrupt generator 1
    pub int1: bool,
    /// Interrupt generator 2
    pub int2: bool,
    /// Reboot memory content on INT1
    pub boot_i1: bool,
    /// Active function status
    pub p2_act: bool,
    /// Interrupts are active low (`H_LACTIVE`)
    pub active_low: bool,
}

impl Int2PinConfig {
    /// Register value, bits 2 and 0 are always clear
    pub fn value(&self) -> u8 {
        let flags = [
            self.click,
            self.int1,
            self.int2,
            self.boot_i1,
            self.p2_act,
            self.active_low,
        ];
        pack(&flags, &INT2_PIN_BITS)
    }
}

/// Interrupt generator conditions, `INTx_CFG_A` with `INTx_THS_A` and `INTx_DURATION_A`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EventConfig {
    /// AND combination of the enabled events instead of OR (`AOI`)
    pub and_combination: bool,
    /// 6-direction detection (`6D`)
    pub six_direction: bool,
    pub z_high: bool,
    pub z_low: bool,
    pub y_high: bool,
    pub y_low: bool,
    pub x_high: bool,
    pub x_low: bool,
    /// Only the low 7 bits are used
    pub threshold: u8,
    /// Only the low 7 bits are used
    pub duration: u8,
}

impl EventConfig {
    /// `INTx_CFG_A` value
    pub fn cfg_value(&self) -> u8 {
        let flags = [
            self.and_combination,
            self.six_direction,
            self.z_high,
            self.z_low,
            self.y_high,
            self.y_low,
            self.x_high,
            self.x_low,
        ];
        pack(&flags, &EVENT_BITS)
    }

    pub fn threshold_value(&self) -> u8 {
        self.threshold & SEVEN_BIT_MASK
    }

    pub fn duration_value(&self) -> u8 {
        self.duration & SEVEN_BIT_MASK
    }
}

/// Selects one of the two accelerometer interrupt generators
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Generator {
    Int1,
    Int2,
}

pub(crate) struct GeneratorRegisters {
    pub(crate) cfg: AccelRegister,
    pub(crate) src: AccelRegister,
    pub(crate) ths: AccelRegister,
    pub(crate) duration: AccelRegister,
}

impl Generator {
    pub(crate) fn registers(self) -> GeneratorRegisters {
        match self {
            Generator::Int1 => GeneratorRegisters {
                cfg: AccelRegister::INT1_CFG_A,
                src: AccelRegister::INT1_SRC_A,
                ths: AccelRegister::INT1_THS_A,
                duration: AccelRegister::INT1_DURATION_A,
            },
            Generator::Int2 => GeneratorRegisters {
                cfg: AccelRegister::INT2_CFG_A,
                src: AccelRegister::INT2_SRC_A,
                ths: AccelRegister::INT2_THS_A,
                duration: AccelRegister::INT2_DURATION_A,
            },
        }
    }
}

/// Content of `INTx_SRC_A`. Reading it from the sensor clears the latched interrupt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GeneratorSource {
    pub value: u8,
}

impl GeneratorSource {
    pub fn new(value: u8) -> GeneratorSource {
        GeneratorSource { value }
    }

    /// One or more interrupts have been generated
    pub fn active(&self) -> bool {
        self.value & IA != 0
    }

    pub fn z_high(&self) -> bool {
        self.value & ZH != 0
    }

    pub fn z_low(&self) -> bool {
        self.value & ZL != 0
    }

    pub fn y_high(&self) -> bool {
        self.value & YH != 0
    }

    pub fn y_low(&self) -> bool {
        self.value & YL != 0
    }

    pub fn x_high(&self) -> bool {
        self.value & XH != 0
    }

    pub fn x_low(&self) -> bool {
        self.value & XL != 0
    }
}
