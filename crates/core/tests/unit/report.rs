//! Report rendering and result conversion tests.

use aluv_core::common::VerifyError;
use aluv_core::device::TtAlu;
use aluv_core::report::{RunReport, RunStatus};
use aluv_core::sim::scenario;
use pretty_assertions::assert_eq;

use crate::common::harness::run_default;
use crate::common::mocks::faulty::FaultyAlu;

#[test]
fn test_new_report_is_incomplete() {
    let report = RunReport::new("dut");
    assert_eq!(report.status, RunStatus::Incomplete);
    assert!(!report.passed());
    assert!(matches!(
        report.into_result(),
        Err(VerifyError::PreconditionViolation { .. })
    ));
}

#[test]
fn test_display_table() {
    let report = run_default(TtAlu::new(), &scenario::default_script());
    let text = report.to_string();

    assert!(text.contains("ALU VERIFICATION REPORT: tt_um_alu"));
    assert!(text.contains("scenarios_passed         13/13"));
    assert!(text.contains("status                   PASSED"));
    assert!(text.contains("zz111100"));
    assert_eq!(text.lines().filter(|l| l.ends_with("PASS")).count(), 13);
}

#[test]
fn test_display_failure_cause() {
    let report = run_default(FaultyAlu::wrong_sub_carry(), &scenario::default_script());
    let text = report.to_string();

    assert!(text.contains("status                   FAILED"));
    assert!(text.contains("cause                    scenario `SUB` failed: carry expected 1, observed 0"));
    assert_eq!(text.lines().filter(|l| l.ends_with("FAIL")).count(), 1);
}

#[test]
fn test_json_shape() {
    let report = run_default(FaultyAlu::wrong_sub_carry(), &scenario::default_script());
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["device"], "faulty_alu");
    assert_eq!(json["status"]["status"], "failed");
    assert_eq!(json["status"]["scenario"], "SUB");
    assert_eq!(json["clock_edges"], 8);

    let last = &json["verdicts"][4];
    assert_eq!(last["opcode"], "SUB");
    assert_eq!(last["outcome"]["outcome"], "fail");
    assert_eq!(last["expected"]["carry"], 1);
    assert_eq!(last["observed"]["carry"], 0);
    assert_eq!(json["verdicts"][0]["outcome"]["outcome"], "pass");
}

#[test]
fn test_serialize_error_is_not_a_load_error() {
    let err = VerifyError::Serialize("key must be a string".to_string());
    assert_eq!(err.to_string(), "cannot serialize report: key must be a string");
    assert!(!err.is_verdict_failure());
    assert_eq!(err.scenario(), None);

    let report = run_default(TtAlu::new(), &scenario::default_script());
    assert!(report.to_json().is_ok());
}

#[test]
fn test_into_result_returns_first_error() {
    let passed = run_default(TtAlu::new(), &scenario::default_script());
    assert!(passed.into_result().is_ok());

    let failed = run_default(FaultyAlu::wrong_sub_carry(), &scenario::default_script());
    let err = failed.into_result().unwrap_err();
    assert!(matches!(err, VerifyError::VerificationMismatch { ref scenario, .. } if scenario == "SUB"));
}
