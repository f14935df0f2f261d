//! Ternary signal values.
//!
//! This module defines the per-bit value model sampled from the device boundary. It provides:
//! 1. **Logic:** A single bit that is either defined (`0`/`1`) or indeterminate (`x`/`z`).
//! 2. **BitVector:** An immutable, MSB-first sequence of `Logic` bits with HDL-style text form.
//!
//! Indeterminate bits are a normal simulation artifact (uninitialised registers,
//! undriven outputs). Turning them into integers is the job of the
//! [`resolver`](crate::resolver), never of this module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::VerifyError;

/// A single simulated signal bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Logic {
    /// Driven logic low.
    Zero,
    /// Driven logic high.
    One,
    /// Unknown value (`x`), e.g. a register before its first reset edge.
    Unknown,
    /// High impedance (`z`), i.e. a floating, undriven net.
    HighZ,
}

impl Logic {
    /// Returns `true` for `x` and `z`.
    #[inline]
    pub const fn is_indeterminate(self) -> bool {
        matches!(self, Self::Unknown | Self::HighZ)
    }

    /// Returns the defined value of this bit, or `None` if indeterminate.
    #[inline]
    pub const fn to_bool(self) -> Option<bool> {
        match self {
            Self::Zero => Some(false),
            Self::One => Some(true),
            Self::Unknown | Self::HighZ => None,
        }
    }

    /// Lower-case HDL character for this bit.
    pub const fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Unknown => 'x',
            Self::HighZ => 'z',
        }
    }

    /// Parses one HDL bit character. `u`, `w`, and `-` are treated as unknown.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            'x' | 'X' | 'u' | 'U' | 'w' | 'W' | '-' => Some(Self::Unknown),
            'z' | 'Z' => Some(Self::HighZ),
            _ => None,
        }
    }
}

impl From<bool> for Logic {
    fn from(bit: bool) -> Self {
        if bit { Self::One } else { Self::Zero }
    }
}

/// Immutable MSB-first sequence of ternary bits.
///
/// Index 0 of the internal storage is the least significant bit, so
/// [`BitVector::bit`] uses hardware numbering (`bit(0)` is the LSB) while the
/// `Display`/`FromStr` text form reads most-significant first, the way
/// simulators print a `binstr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: Vec<Logic>,
}

impl BitVector {
    /// Builds a fully-defined vector of `width` bits from the low bits of `value`.
    pub fn from_u64(value: u64, width: usize) -> Self {
        let bits = (0..width)
            .map(|i| Logic::from(i < 64 && (value >> i) & 1 == 1))
            .collect();
        Self { bits }
    }

    /// Builds a vector where every bit holds `fill`.
    pub fn filled(fill: Logic, width: usize) -> Self {
        Self {
            bits: vec![fill; width],
        }
    }

    /// Builds a vector from bits listed LSB first.
    pub const fn from_lsb_first(bits: Vec<Logic>) -> Self {
        Self { bits }
    }

    /// Number of bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Returns bit `index` (0 = LSB), or `None` past the width.
    #[inline]
    pub fn bit(&self, index: usize) -> Option<Logic> {
        self.bits.get(index).copied()
    }

    /// Iterates bits from the most significant down to bit 0.
    pub fn iter_msb_first(&self) -> impl Iterator<Item = Logic> + '_ {
        self.bits.iter().rev().copied()
    }

    /// Returns `true` if any bit is `x` or `z`.
    pub fn has_indeterminate(&self) -> bool {
        self.bits.iter().any(|b| b.is_indeterminate())
    }

    /// Returns a copy with bits `[offset, offset + width)` replaced by `value`.
    ///
    /// Bits of `value` past this vector's width are dropped.
    #[must_use]
    pub fn with_field(&self, offset: usize, value: &Self) -> Self {
        let mut bits = self.bits.clone();
        for (i, b) in value.bits.iter().enumerate() {
            if let Some(slot) = bits.get_mut(offset + i) {
                *slot = *b;
            }
        }
        Self { bits }
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.iter_msb_first() {
            write!(f, "{}", b.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for BitVector {
    type Err = VerifyError;

    /// Parses an MSB-first HDL binary string such as `"00xz0101"`.
    ///
    /// Underscores are accepted as digit separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for c in s.chars().rev().filter(|c| *c != '_') {
            let bit = Logic::from_char(c)
                .ok_or_else(|| VerifyError::InvalidBitString(s.to_string()))?;
            bits.push(bit);
        }
        if bits.is_empty() {
            return Err(VerifyError::InvalidBitString(s.to_string()));
        }
        Ok(Self { bits })
    }
}
