//! Device boundary.
//!
//! This module defines the pin-level contract between the harness and the ALU
//! under test. It provides:
//! 1. **Signals:** Named input and output pins with their widths.
//! 2. **Device trait:** Per-signal drive/sample plus the active clock edge.
//! 3. **Behavioral model:** [`TtAlu`], a pin-accurate model of the Tiny Tapeout ALU.
//!
//! The harness treats any `Device` as a black box. The sequencer owns the only
//! reference to it; there is no ambient pin state.

/// Behavioral model of the Tiny Tapeout 4-bit ALU.
pub mod tt_alu;

use std::fmt;

use crate::common::BitVector;
use crate::common::constants::{INPUT_BUS_WIDTH, OUTPUT_BUS_WIDTH, UIO_BUS_WIDTH};

pub use tt_alu::TtAlu;

/// Pins driven by the harness. The clock is driven by the scheduler through
/// [`Device::rising_edge`] and is not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSignal {
    /// Synchronous active-low reset.
    RstN,
    /// Design enable (active high).
    Ena,
    /// Dedicated inputs: operand A in `[3:0]`, operand B in `[7:4]`.
    UiIn,
    /// Bidirectional inputs: opcode in `[2:0]`.
    UioIn,
}

impl InputSignal {
    /// Every input pin, in the order the sequencer drives them.
    pub const ALL: [Self; 4] = [Self::RstN, Self::Ena, Self::UiIn, Self::UioIn];

    /// HDL port name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RstN => "rst_n",
            Self::Ena => "ena",
            Self::UiIn => "ui_in",
            Self::UioIn => "uio_in",
        }
    }

    /// Width in bits.
    pub const fn width(self) -> usize {
        match self {
            Self::RstN | Self::Ena => 1,
            Self::UiIn => INPUT_BUS_WIDTH,
            Self::UioIn => UIO_BUS_WIDTH,
        }
    }
}

impl fmt::Display for InputSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pins sampled by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSignal {
    /// Dedicated outputs: result `[3:0]`, carry `[4]`, parity `[5]`.
    UoOut,
    /// Bidirectional outputs (unused by the ALU).
    UioOut,
    /// Bidirectional output enables (unused by the ALU).
    UioOe,
}

impl OutputSignal {
    /// HDL port name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::UoOut => "uo_out",
            Self::UioOut => "uio_out",
            Self::UioOe => "uio_oe",
        }
    }

    /// Width in bits.
    pub const fn width(self) -> usize {
        match self {
            Self::UoOut | Self::UioOut | Self::UioOe => OUTPUT_BUS_WIDTH,
        }
    }
}

impl fmt::Display for OutputSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A clocked device exposing named pins.
///
/// Implementors model a synchronous design: values set with [`Device::drive`]
/// are only captured on [`Device::rising_edge`], and [`Device::sample`]
/// returns the current (possibly indeterminate) pin levels.
pub trait Device {
    /// Returns a short name for this device (e.g., `"tt_um_alu"`).
    fn name(&self) -> &str;

    /// Drives an input pin. Bits above the pin's width are ignored.
    fn drive(&mut self, signal: InputSignal, value: u8);

    /// Samples an output pin. The returned vector is exactly `signal.width()` bits.
    fn sample(&self, signal: OutputSignal) -> BitVector;

    /// Delivers one active (rising) clock edge.
    fn rising_edge(&mut self);
}

impl<D: Device + ?Sized> Device for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn drive(&mut self, signal: InputSignal, value: u8) {
        (**self).drive(signal, value);
    }

    fn sample(&self, signal: OutputSignal) -> BitVector {
        (**self).sample(signal)
    }

    fn rising_edge(&mut self) {
        (**self).rising_edge();
    }
}
