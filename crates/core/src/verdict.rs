//! Verdict engine.
//!
//! Compares one resolved device sample against the reference model's
//! expectation. All three output fields are compared and every mismatch is
//! reported together, so a single failure message pinpoints each wrong field.

use crate::common::constants::OUTPUT_MASK;
use crate::common::{FieldMismatch, OutputField, VerifyError};
use crate::model::{AluOutput, ExpectedOutput, ObservedOutput};
use crate::resolver::ResolvedWord;
use crate::sim::scenario::{Check, Scenario};

/// Lists the fields of `observed` that differ from `expected`, in bus order.
pub fn compare(expected: ExpectedOutput, observed: ObservedOutput) -> Vec<FieldMismatch> {
    [
        (OutputField::Result, expected.result, observed.result),
        (OutputField::Carry, expected.carry, observed.carry),
        (OutputField::Parity, expected.parity, observed.parity),
    ]
    .into_iter()
    .filter(|(_, e, o)| e != o)
    .map(|(field, expected, observed)| FieldMismatch {
        field,
        expected,
        observed,
    })
    .collect()
}

/// Checks one scenario's sample.
///
/// `observed` is the resolved `uo_out` word; only its low six bits are used.
///
/// # Errors
///
/// - [`VerifyError::VerificationMismatch`] listing every differing field when
///   the scenario is checked against the reference model.
/// - [`VerifyError::PreconditionViolation`] when a
///   [`Check::NonZeroResult`] step observes a zero result.
pub fn check(
    scenario: &Scenario,
    observed: ResolvedWord,
    expected: ExpectedOutput,
) -> Result<(), VerifyError> {
    let observed = AluOutput::from_word(observed & OUTPUT_MASK);
    match scenario.check {
        Check::Reference => {
            let mismatches = compare(expected, observed);
            if mismatches.is_empty() {
                Ok(())
            } else {
                Err(VerifyError::VerificationMismatch {
                    scenario: scenario.name.clone(),
                    mismatches,
                })
            }
        }
        Check::NonZeroResult => {
            if observed.result == 0 {
                Err(VerifyError::PreconditionViolation {
                    scenario: scenario.name.clone(),
                    detail: format!(
                        "expected a non-zero result before the real test point, observed {}",
                        observed.result
                    ),
                })
            } else {
                Ok(())
            }
        }
    }
}
