//! Terraform CLI engine implementation
//!
//! This module implements the [`ProvisioningEngine`] trait over the
//! `terraform` binary. Every operation runs in the module directory with
//! `-input=false` and `TF_IN_AUTOMATION=1`; when the configuration
//! carries a `data_dir`, it is exported as `TF_DATA_DIR` so concurrent
//! invocations keep independent working state.
//!
//! Diagnostics are surfaced verbatim: a non-zero exit becomes an error
//! carrying the engine's stderr unchanged, with the variant chosen by
//! [`brokkr_core::Error::from_engine_diagnostic`].

use crate::summary::{parse_plan_summary, PlanSummary};
use crate::traits::ProvisioningEngine;
use anyhow::Result;
use async_trait::async_trait;
use brokkr_core::{Error, ModuleConfig};
use std::process::Output;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Terraform CLI engine
pub struct TerraformCli {
    /// Path to the terraform binary (if not in PATH)
    binary_path: Option<String>,
}

impl TerraformCli {
    /// Create a new Terraform engine
    pub fn new() -> Self {
        Self { binary_path: None }
    }

    /// Create a Terraform engine with a specific binary path
    pub fn with_binary_path(path: impl Into<String>) -> Self {
        Self {
            binary_path: Some(path.into()),
        }
    }

    /// Get the terraform command
    fn terraform_cmd(&self) -> String {
        self.binary_path
            .clone()
            .unwrap_or_else(|| "terraform".to_string())
    }

    /// Fail fast on a missing module directory; everything past this
    /// point is the engine's job to diagnose.
    fn ensure_module_dir(config: &ModuleConfig) -> Result<()> {
        if !config.module_dir.is_dir() {
            return Err(Error::module_dir_not_found(config.module_dir.as_str()).into());
        }
        Ok(())
    }

    /// Run one terraform subcommand in the module directory
    async fn exec(&self, config: &ModuleConfig, args: &[String]) -> Result<Output> {
        Self::ensure_module_dir(config)?;

        let program = self.terraform_cmd();
        debug!(
            "Running {} {} in {}",
            program,
            args.join(" "),
            config.module_dir
        );

        let mut cmd = Command::new(&program);
        cmd.args(args)
            .current_dir(config.module_dir.as_std_path())
            .env("TF_IN_AUTOMATION", "1");

        if let Some(data_dir) = &config.data_dir {
            cmd.env("TF_DATA_DIR", data_dir.as_str());
        }

        for (name, value) in &config.env {
            cmd.env(name, value);
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::invocation(program.as_str(), e.to_string()))?;

        Ok(output)
    }

    /// Common arguments for operations that take input variables
    fn with_common_args(&self, config: &ModuleConfig, mut args: Vec<String>) -> Vec<String> {
        args.push("-input=false".to_string());
        if config.no_color {
            args.push("-no-color".to_string());
        }
        args.extend(var_args(config));
        args
    }
}

impl Default for TerraformCli {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the `-var` / `-var-file` arguments for a configuration
pub fn var_args(config: &ModuleConfig) -> Vec<String> {
    let mut args = Vec::new();

    for (name, value) in &config.vars {
        args.push("-var".to_string());
        args.push(format!("{}={}", name, value.to_arg_value()));
    }

    for var_file in &config.var_files {
        args.push(format!("-var-file={}", var_file));
    }

    args
}

#[async_trait]
impl ProvisioningEngine for TerraformCli {
    fn name(&self) -> &'static str {
        "terraform"
    }

    fn check_installed(&self) -> bool {
        which::which(self.terraform_cmd()).is_ok()
    }

    fn version(&self) -> Option<String> {
        let output = std::process::Command::new(self.terraform_cmd())
            .arg("version")
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        // "Terraform v1.9.5" on the first line
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .map(|line| line.trim().replace("Terraform v", ""))
    }

    async fn init(&self, config: &ModuleConfig) -> Result<()> {
        info!("Initializing module {}", config.module_dir);

        let mut args = vec!["init".to_string(), "-input=false".to_string()];
        if config.no_color {
            args.push("-no-color".to_string());
        }

        let output = self.exec(config, &args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::from_engine_diagnostic("terraform init", stderr).into());
        }

        Ok(())
    }

    async fn plan(&self, config: &ModuleConfig) -> Result<PlanSummary> {
        info!("Computing plan for module {}", config.module_dir);

        let args = self.with_common_args(config, vec!["plan".to_string()]);

        let output = self.exec(config, &args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::from_engine_diagnostic("terraform plan", stderr).into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let summary = parse_plan_summary(&stdout);
        info!(
            "Plan for {}: {} to add, {} to change, {} to destroy",
            config.module_dir, summary.add, summary.change, summary.destroy
        );

        Ok(summary)
    }

    async fn destroy(&self, config: &ModuleConfig) -> Result<()> {
        info!("Destroying module {}", config.module_dir);

        let args = self.with_common_args(
            config,
            vec!["destroy".to_string(), "-auto-approve".to_string()],
        );

        let output = self.exec(config, &args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::teardown(stderr).into());
        }

        Ok(())
    }

    async fn validate(&self, config: &ModuleConfig) -> Result<()> {
        let mut args = vec!["validate".to_string()];
        if config.no_color {
            args.push("-no-color".to_string());
        }

        let output = self.exec(config, &args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("Validation failed for {}", config.module_dir);
            return Err(Error::from_engine_diagnostic("terraform validate", stderr).into());
        }

        Ok(())
    }
}
