//! Mock provisioning engine for harness testing
//!
//! Records every call and returns configured outcomes, so the harness's
//! ordering and teardown guarantees can be verified without a terraform
//! binary or cloud credentials.

use anyhow::Result;
use async_trait::async_trait;
use brokkr_core::{Error, ModuleConfig};
use brokkr_terraform::{PlanSummary, ProvisioningEngine};
use std::collections::HashMap;
use std::sync::Mutex;

/// Configured outcome for a plan invocation
#[derive(Clone, Debug)]
pub enum MockPlanOutcome {
    /// Plan succeeds with this many resources to add
    Success { add: u32 },
    /// Plan fails with this engine diagnostic, surfaced verbatim
    Failure { diagnostic: String },
    /// Plan panics, simulating an assertion failure inside the step
    Panic { message: String },
}

/// Mock provisioning engine
pub struct MockEngine {
    init_failure: Mutex<Option<String>>,
    plan_outcomes: Mutex<HashMap<String, MockPlanOutcome>>,
    destroy_failure: Mutex<Option<String>>,
    calls: Mutex<Vec<String>>,
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            init_failure: Mutex::new(None),
            plan_outcomes: Mutex::new(HashMap::new()),
            destroy_failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make init fail with the given diagnostic
    pub fn fail_init(&self, diagnostic: &str) {
        *self.init_failure.lock().unwrap() = Some(diagnostic.to_string());
    }

    /// Set the plan outcome for a module directory
    pub fn set_plan_outcome(&self, module_dir: &str, outcome: MockPlanOutcome) {
        self.plan_outcomes
            .lock()
            .unwrap()
            .insert(module_dir.to_string(), outcome);
    }

    /// Make destroy fail with the given diagnostic
    pub fn fail_destroy(&self, diagnostic: &str) {
        *self.destroy_failure.lock().unwrap() = Some(diagnostic.to_string());
    }

    /// All recorded calls, in invocation order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of destroy invocations recorded
    pub fn destroy_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with("destroy:"))
            .count()
    }

    fn record(&self, operation: &str, config: &ModuleConfig) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", operation, config.module_dir));
    }
}

#[async_trait]
impl ProvisioningEngine for MockEngine {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn check_installed(&self) -> bool {
        true
    }

    fn version(&self) -> Option<String> {
        Some("0.0.0-mock".to_string())
    }

    async fn init(&self, config: &ModuleConfig) -> Result<()> {
        self.record("init", config);

        let failure = self.init_failure.lock().unwrap().clone();
        match failure {
            Some(diagnostic) => {
                Err(Error::from_engine_diagnostic("terraform init", diagnostic).into())
            }
            None => Ok(()),
        }
    }

    async fn plan(&self, config: &ModuleConfig) -> Result<PlanSummary> {
        self.record("plan", config);

        let outcome = self
            .plan_outcomes
            .lock()
            .unwrap()
            .get(config.module_dir.as_str())
            .cloned()
            .unwrap_or(MockPlanOutcome::Success { add: 0 });

        match outcome {
            MockPlanOutcome::Success { add } => Ok(PlanSummary {
                add,
                change: 0,
                destroy: 0,
                raw: format!("Plan: {} to add, 0 to change, 0 to destroy.", add),
            }),
            MockPlanOutcome::Failure { diagnostic } => {
                Err(Error::from_engine_diagnostic("terraform plan", diagnostic).into())
            }
            MockPlanOutcome::Panic { message } => panic!("{}", message),
        }
    }

    async fn destroy(&self, config: &ModuleConfig) -> Result<()> {
        self.record("destroy", config);

        let failure = self.destroy_failure.lock().unwrap().clone();
        match failure {
            Some(diagnostic) => Err(Error::teardown(diagnostic).into()),
            None => Ok(()),
        }
    }

    async fn validate(&self, config: &ModuleConfig) -> Result<()> {
        self.record("validate", config);
        Ok(())
    }
}
