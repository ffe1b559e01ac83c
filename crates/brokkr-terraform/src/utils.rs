//! Utility functions for Terraform operations
//!
//! Prerequisite checks and small helpers shared by the engine and the
//! integration test suites.

use anyhow::{Context, Result};
use tracing::debug;

/// Check if the Terraform CLI is installed
pub fn check_terraform_installed() -> Result<Option<String>> {
    match which::which("terraform") {
        Ok(path) => {
            debug!("Found Terraform at: {}", path.display());
            let output = std::process::Command::new("terraform")
                .arg("version")
                .output()
                .context("Failed to get Terraform version")?;

            if output.status.success() {
                let version = String::from_utf8_lossy(&output.stdout)
                    .lines()
                    .next()
                    .unwrap_or("unknown")
                    .trim()
                    .replace("Terraform v", "");
                Ok(Some(version))
            } else {
                Ok(Some("unknown".to_string()))
            }
        }
        Err(_) => Ok(None),
    }
}

/// Check if AWS credentials are configured
pub fn check_aws_credentials() -> bool {
    let result = std::process::Command::new("aws")
        .args(["sts", "get-caller-identity"])
        .output();

    match result {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

/// Generate a unique run ID
pub fn generate_run_id() -> String {
    uuid::Uuid::new_v4().to_string()[..8].to_string()
}
