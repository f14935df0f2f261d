//! Common types and constants shared across the verification core.
//!
//! This module provides the building blocks used by every other component. It includes:
//! 1. **Constants:** Bus widths, operand packing, and output bit offsets.
//! 2. **Error Handling:** The `VerifyError` taxonomy and per-field mismatch records.
//! 3. **Signal Values:** Ternary `Logic` bits and the immutable `BitVector`.

/// Bus layout constants of the device under test.
pub mod constants;

/// Error types raised by the verification core.
pub mod error;

/// Ternary bit and bit-vector types.
pub mod logic;

pub use error::{FieldMismatch, OutputField, VerifyError};
pub use logic::{BitVector, Logic};
