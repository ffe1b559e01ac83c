//! Assertion helpers for plan-test reports

use brokkr_terraform::{PlanSummary, PlanTestReport};

/// Assert that the plan step passed
pub fn assert_plan_passed(report: &PlanTestReport) {
    assert!(
        report.passed(),
        "Plan step failed: {:#}",
        report.plan.as_ref().err().unwrap()
    );
}

/// Assert that the plan step failed
pub fn assert_plan_failed(report: &PlanTestReport) {
    assert!(
        !report.passed(),
        "Plan step unexpectedly passed: {:?}",
        report.plan_summary()
    );
}

/// Assert that teardown completed without error
pub fn assert_teardown_clean(report: &PlanTestReport) {
    assert!(
        report.teardown.is_ok(),
        "Teardown failed, resources may have leaked: {:#}",
        report.teardown.as_ref().err().unwrap()
    );
}

/// Assert that the plan output references the given resource expression
pub fn assert_plan_references(summary: &PlanSummary, expr: &str) {
    assert!(
        summary.raw.contains(expr),
        "Plan output does not reference {}.\nOutput:\n{}",
        expr,
        summary.raw
    );
}
