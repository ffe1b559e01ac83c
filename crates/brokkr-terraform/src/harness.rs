//! Plan-test harness with guaranteed teardown
//!
//! The harness runs a three-step script per test case: take the
//! configuration record, ask the engine to init-and-plan, and
//! unconditionally tear down afterwards. Teardown runs exactly once,
//! after the plan step, on every exit path - normal completion, plan
//! error, or a panic inside the plan step (assertion failures included).

use crate::summary::PlanSummary;
use crate::traits::ProvisioningEngine;
use brokkr_core::ModuleConfig;
use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Outcome of one module plan test
///
/// Plan and teardown results are recorded separately: a teardown failure
/// never retroactively changes an already-recorded plan verdict, it only
/// signals possible leaked resources.
#[derive(Debug)]
pub struct PlanTestReport {
    /// Module the test ran against
    pub module_dir: Utf8PathBuf,

    /// Result of the init-and-plan step
    pub plan: anyhow::Result<PlanSummary>,

    /// Result of the unconditional teardown
    pub teardown: anyhow::Result<()>,

    /// When the test case started
    pub started_at: DateTime<Utc>,

    /// Total wall-clock time including teardown
    pub duration: Duration,
}

impl PlanTestReport {
    /// Whether the plan step completed without error
    pub fn passed(&self) -> bool {
        self.plan.is_ok()
    }

    /// The parsed plan summary, if the plan step passed
    pub fn plan_summary(&self) -> Option<&PlanSummary> {
        self.plan.as_ref().ok()
    }

    /// Collapse the report into the plan result.
    ///
    /// Teardown failures do not surface here; they are reported in the
    /// `teardown` field and logged when they happen.
    pub fn into_result(self) -> anyhow::Result<PlanSummary> {
        self.plan
    }
}

/// Run one module plan test with guaranteed teardown.
///
/// 1. Invokes `init_and_plan` on the engine with the given configuration.
/// 2. Invokes `destroy` on the same configuration afterwards, no matter
///    how the plan step ended. A panic from the plan step is re-raised
///    only after teardown has run, preserving the test failure.
/// 3. Reports both outcomes without retry or interpretation.
pub async fn run_module_plan_test<E>(engine: &E, config: &ModuleConfig) -> PlanTestReport
where
    E: ProvisioningEngine + ?Sized,
{
    let started_at = Utc::now();
    let started = Instant::now();

    info!(
        "Running plan test for module {} with {}",
        config.module_dir,
        engine.name()
    );

    let plan_outcome = AssertUnwindSafe(engine.init_and_plan(config))
        .catch_unwind()
        .await;

    // Teardown is unconditional: whatever the plan step partially
    // provisioned must not outlive the test case.
    let teardown = engine.destroy(config).await;
    if let Err(err) = &teardown {
        warn!(
            "Teardown failed for {}: {:#}. Resources may have leaked.",
            config.module_dir, err
        );
    }

    let plan = match plan_outcome {
        Ok(result) => result,
        // Re-raise the panic now that teardown has run.
        Err(payload) => std::panic::resume_unwind(payload),
    };

    match &plan {
        Ok(summary) => info!(
            "Plan test for {} passed ({} to add)",
            config.module_dir, summary.add
        ),
        Err(err) => info!("Plan test for {} failed: {:#}", config.module_dir, err),
    }

    PlanTestReport {
        module_dir: config.module_dir.clone(),
        plan,
        teardown,
        started_at,
        duration: started.elapsed(),
    }
}
