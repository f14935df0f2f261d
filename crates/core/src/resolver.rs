//! Indeterminate-value resolution.
//!
//! Converts a sampled [`BitVector`] into a concrete unsigned word. The policy
//! is fixed: every `x` or `z` bit reads as logic 0, and all bits are then
//! interpreted as an MSB-first binary literal. Resolution never fails, since
//! indeterminate bits are expected right after power-up and on undriven pins.
//!
//! The same rule is applied to every sample in a run so that comparisons are
//! consistent across scenarios. For a fully-defined vector the result is
//! exactly the vector's binary value.

use crate::common::{BitVector, Logic};

/// Concrete value of a resolved bus sample.
pub type ResolvedWord = u64;

/// Widest vector the resolver accepts; wider buses do not fit a [`ResolvedWord`].
pub const MAX_RESOLVE_WIDTH: usize = ResolvedWord::BITS as usize;

/// Value substituted for every indeterminate bit.
pub const INDETERMINATE_AS: Logic = Logic::Zero;

/// Resolves `raw` to an integer, mapping indeterminate bits to [`INDETERMINATE_AS`].
///
/// Bits above [`MAX_RESOLVE_WIDTH`] are not representable and are ignored;
/// device buses in this crate are at most 8 bits wide.
///
/// # Examples
///
/// ```
/// use aluv_core::common::BitVector;
/// use aluv_core::resolver::resolve;
///
/// let raw: BitVector = "zz0x0101".parse().unwrap();
/// assert_eq!(resolve(&raw), 0b0000_0101);
///
/// let defined: BitVector = "00100101".parse().unwrap();
/// assert_eq!(resolve(&defined), 0x25);
/// ```
pub fn resolve(raw: &BitVector) -> ResolvedWord {
    raw.iter_msb_first()
        .skip(raw.width().saturating_sub(MAX_RESOLVE_WIDTH))
        .fold(0, |acc, bit| {
            let bit = if bit.is_indeterminate() {
                INDETERMINATE_AS
            } else {
                bit
            };
            (acc << 1) | ResolvedWord::from(bit == Logic::One)
        })
}

/// Resolves `raw` and keeps only the bits selected by `mask`.
#[inline]
pub fn resolve_masked(raw: &BitVector, mask: ResolvedWord) -> ResolvedWord {
    resolve(raw) & mask
}

/// Direct binary interpretation of a vector with no indeterminate bits.
///
/// Returns `None` if any bit is `x` or `z`. For every vector where this
/// returns `Some(v)`, [`resolve`] returns the same `v`.
pub fn to_defined(raw: &BitVector) -> Option<ResolvedWord> {
    raw.iter_msb_first()
        .skip(raw.width().saturating_sub(MAX_RESOLVE_WIDTH))
        .try_fold(0, |acc: ResolvedWord, bit| {
            bit.to_bool().map(|b| (acc << 1) | ResolvedWord::from(b))
        })
}
