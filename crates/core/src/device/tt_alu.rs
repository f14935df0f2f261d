//! Tiny Tapeout 4-bit ALU, behavioral model.
//!
//! Pin-accurate model of the `tt_um` ALU: a single 6-bit output register
//! updated on every rising clock edge. It is written as the hardware is, as a
//! 5-bit datapath with an XOR-reduced parity, and deliberately does not share
//! code with the reference model it is verified against.
//!
//! Power-up and undriven behavior follow a four-state simulator:
//! - The output register holds `x` until the first edge that defines it.
//! - `uo_out[7:6]` are never driven and read as `z`.
//! - An edge that sees an undriven or unknown control/data pin loads `x`.

use tracing::trace;

use super::{Device, InputSignal, OutputSignal};
use crate::common::constants::{OUTPUT_BUS_WIDTH, OUTPUT_FIELD_BITS};
use crate::common::{BitVector, Logic};

/// Width of the internal `{carry, result}` datapath.
const DATAPATH_MASK: u8 = 0x1F;

/// Behavioral model of the Tiny Tapeout ALU.
#[derive(Debug, Clone)]
pub struct TtAlu {
    rst_n: Option<bool>,
    ena: Option<bool>,
    ui_in: Option<u8>,
    uio_in: Option<u8>,
    /// Registered `uo_out[5:0]`; `None` while the register holds `x`.
    out_reg: Option<u8>,
    edges: u64,
}

impl Default for TtAlu {
    fn default() -> Self {
        Self::new()
    }
}

impl TtAlu {
    /// Creates a powered-up device: all inputs undriven, output register `x`.
    pub const fn new() -> Self {
        Self {
            rst_n: None,
            ena: None,
            ui_in: None,
            uio_in: None,
            out_reg: None,
            edges: 0,
        }
    }

    /// Number of rising edges delivered so far.
    pub const fn edges(&self) -> u64 {
        self.edges
    }

    /// Next register value given the pins captured at this edge.
    ///
    /// Reset low loads zero even while `ena` is undriven.
    fn next_state(&self) -> Option<u8> {
        if !self.rst_n? || !self.ena? {
            return Some(0);
        }
        let ui = self.ui_in?;
        let op = self.uio_in? & 0b111;
        Some(Self::datapath(ui & 0xF, ui >> 4, op))
    }

    /// `{parity, carry, result[3:0]}` for one operation.
    fn datapath(a: u8, b: u8, op: u8) -> u8 {
        let wide = match op {
            0b000 => a + b,
            0b001 => a.wrapping_sub(b) & DATAPATH_MASK,
            0b010 => a & b,
            0b011 => a | b,
            0b100 => a ^ b,
            0b101 => !(a | b) & 0xF,
            0b110 => !a & 0xF,
            _ => b,
        };
        let parity = (wide & DATAPATH_MASK).count_ones() as u8 & 1;
        (parity << 5) | (wide & DATAPATH_MASK)
    }
}

impl Device for TtAlu {
    fn name(&self) -> &str {
        "tt_um_alu"
    }

    fn drive(&mut self, signal: InputSignal, value: u8) {
        match signal {
            InputSignal::RstN => self.rst_n = Some(value & 1 == 1),
            InputSignal::Ena => self.ena = Some(value & 1 == 1),
            InputSignal::UiIn => self.ui_in = Some(value),
            InputSignal::UioIn => self.uio_in = Some(value),
        }
    }

    fn sample(&self, signal: OutputSignal) -> BitVector {
        match signal {
            OutputSignal::UoOut => {
                let field = self.out_reg.map_or_else(
                    || BitVector::filled(Logic::Unknown, OUTPUT_FIELD_BITS),
                    |v| BitVector::from_u64(u64::from(v), OUTPUT_FIELD_BITS),
                );
                BitVector::filled(Logic::HighZ, OUTPUT_BUS_WIDTH).with_field(0, &field)
            }
            OutputSignal::UioOut | OutputSignal::UioOe => {
                BitVector::from_u64(0, signal.width())
            }
        }
    }

    fn rising_edge(&mut self) {
        self.edges += 1;
        self.out_reg = self.next_state();
        trace!(
            edge = self.edges,
            out = ?self.out_reg,
            "tt_um_alu: output register updated"
        );
    }
}
