//! Device Boundary Constants.
//!
//! This module defines the fixed bus layout of the ALU under test. It includes:
//! 1. **Widths:** Operand, opcode, and bus widths.
//! 2. **Input packing:** Where operands A and B live inside `ui_in`.
//! 3. **Output layout:** Bit offsets and masks of result, carry, and parity inside `uo_out`.

/// Width of each ALU operand in bits.
pub const OPERAND_BITS: u32 = 4;

/// Mask for a single 4-bit operand or result.
pub const NIBBLE_MASK: u8 = 0xF;

/// Modulus of 4-bit arithmetic (results wrap at this value).
pub const NIBBLE_MODULUS: u16 = 1 << OPERAND_BITS;

/// Width of the opcode field (`uio_in[2:0]`).
pub const OPCODE_BITS: u32 = 3;

/// Mask for the opcode field.
pub const OPCODE_MASK: u8 = (1 << OPCODE_BITS) - 1;

/// Width of the dedicated input bus `ui_in`.
pub const INPUT_BUS_WIDTH: usize = 8;

/// Width of the bidirectional bus `uio_in` (only the low 3 bits carry the opcode).
pub const UIO_BUS_WIDTH: usize = 8;

/// Width of the output bus `uo_out`.
pub const OUTPUT_BUS_WIDTH: usize = 8;

/// Shift of operand A inside `ui_in` (low nibble).
pub const OPERAND_A_SHIFT: u32 = 0;

/// Shift of operand B inside `ui_in` (high nibble).
pub const OPERAND_B_SHIFT: u32 = 4;

/// Number of meaningful output bits: 4-bit result, carry, parity.
pub const OUTPUT_FIELD_BITS: usize = 6;

/// Mask applied to the resolved output word before field extraction.
pub const OUTPUT_MASK: u64 = (1 << OUTPUT_FIELD_BITS) - 1;

/// Bit offset of the 4-bit result in `uo_out`.
pub const RESULT_SHIFT: u32 = 0;

/// Bit offset of the carry flag in `uo_out`.
pub const CARRY_BIT: u32 = 4;

/// Bit offset of the parity flag in `uo_out`.
pub const PARITY_BIT: u32 = 5;
