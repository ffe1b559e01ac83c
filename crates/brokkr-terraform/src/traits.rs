//! Provisioning engine trait definitions
//!
//! This module defines the core trait for infrastructure provisioning
//! engines that the plan-test harness drives (Terraform today; anything
//! with an init/plan/destroy lifecycle tomorrow).

use crate::summary::PlanSummary;
use anyhow::Result;
use async_trait::async_trait;
use brokkr_core::ModuleConfig;

/// Trait for infrastructure provisioning engines
///
/// An engine takes a [`ModuleConfig`] (module directory plus resolved
/// input variables), initializes the module's backend and provider
/// dependencies, computes a proposed change-set without applying it, and
/// can tear down whatever a configuration created.
///
/// # Example
///
/// ```ignore
/// use brokkr_core::ModuleConfig;
/// use brokkr_terraform::{ProvisioningEngine, TerraformCli};
///
/// let engine = TerraformCli::new();
/// let config = ModuleConfig::new("terraform/modules/vpc")
///     .with_var("vpc_cidr", "10.0.0.0/16");
///
/// let summary = engine.init_and_plan(&config).await?;
/// println!("{} to add", summary.add);
///
/// engine.destroy(&config).await?;
/// ```
#[async_trait]
pub trait ProvisioningEngine: Send + Sync {
    /// Get the engine name (e.g., "terraform")
    fn name(&self) -> &'static str;

    /// Check if the engine CLI tool is installed
    fn check_installed(&self) -> bool;

    /// Get the installed version of the engine CLI tool
    fn version(&self) -> Option<String>;

    /// Initialize the module's dependency and backend state
    async fn init(&self, config: &ModuleConfig) -> Result<()>;

    /// Compute a proposed change-set against the live environment
    /// without applying any changes
    async fn plan(&self, config: &ModuleConfig) -> Result<PlanSummary>;

    /// Initialize, then plan.
    ///
    /// Errors from either step propagate verbatim; there is no retry.
    async fn init_and_plan(&self, config: &ModuleConfig) -> Result<PlanSummary> {
        self.init(config).await?;
        self.plan(config).await
    }

    /// Remove any resources associated with this configuration
    async fn destroy(&self, config: &ModuleConfig) -> Result<()>;

    /// Validate module syntax and variable bindings without contacting
    /// the provider
    async fn validate(&self, config: &ModuleConfig) -> Result<()>;
}
