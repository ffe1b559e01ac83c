//! Terraform engine wrapper and plan-test harness for Brokkr
//!
//! This crate drives the `terraform` CLI through an init/plan/destroy
//! lifecycle for module integration testing:
//!
//! - **Engine wrapper** - [`TerraformCli`] implements
//!   [`ProvisioningEngine`], spawning `terraform init`, `plan`,
//!   `destroy`, and `validate` in the module directory with the
//!   configuration's variables rendered as `-var` arguments
//! - **Harness** - [`run_module_plan_test`] runs init-and-plan, then
//!   tears down unconditionally: exactly once, after the plan step, on
//!   every exit path (success, engine error, or panic)
//! - **Plan parsing** - [`PlanSummary`] carries the parsed change counts
//!   plus the raw output for content assertions
//!
//! # Example
//!
//! ```ignore
//! use brokkr_core::{ModuleConfig, VarValue};
//! use brokkr_terraform::{run_module_plan_test, TerraformCli};
//!
//! let engine = TerraformCli::new();
//! let config = ModuleConfig::new("terraform/modules/vpc")
//!     .with_var("cluster_name", "test-cluster")
//!     .with_var("vpc_cidr", "10.0.0.0/16")
//!     .with_var(
//!         "availability_zones",
//!         VarValue::list(["eu-central-1a", "eu-central-1b"]),
//!     );
//!
//! let report = run_module_plan_test(&engine, &config).await;
//! assert!(report.passed());
//! ```
//!
//! # Concurrency
//!
//! Test cases are independent: each owns its configuration record, and
//! concurrent cases set distinct `data_dir`s so Terraform working state
//! (plugin caches, lock files) never collides. The harness itself holds
//! no shared mutable state.

pub mod harness;
pub mod summary;
pub mod terraform;
pub mod traits;
pub mod utils;

// Re-export main types for convenience
pub use harness::{run_module_plan_test, PlanTestReport};
pub use summary::{parse_plan_summary, PlanSummary};
pub use terraform::{var_args, TerraformCli};
pub use traits::ProvisioningEngine;
pub use utils::{check_aws_credentials, check_terraform_installed};
