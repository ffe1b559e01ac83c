//! Module test configuration records
//!
//! A `ModuleConfig` pairs an on-disk module location with the resolved
//! input variable values for a single test invocation. Each record is
//! ephemeral and exclusively owned by one test case.

use crate::vars::VarValue;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration record for one module test invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// On-disk location of the module definition
    pub module_dir: Utf8PathBuf,

    /// Input variable bindings (name -> value)
    ///
    /// Must supply every variable the module declares as required; the
    /// engine enforces the schema, not this record.
    #[serde(default)]
    pub vars: BTreeMap<String, VarValue>,

    /// Additional variable files passed as `-var-file` arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub var_files: Vec<Utf8PathBuf>,

    /// Extra environment for the engine process (credentials, TF_LOG, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    /// Working-state directory, exported as `TF_DATA_DIR` when set.
    ///
    /// Concurrent test cases against the same module directory must each
    /// set their own so plugin caches and lock files do not collide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<Utf8PathBuf>,

    /// Pass `-no-color` so diagnostics come back clean for assertions
    #[serde(default = "default_no_color")]
    pub no_color: bool,
}

fn default_no_color() -> bool {
    true
}

impl ModuleConfig {
    /// Create a configuration record for the given module directory
    pub fn new(module_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            module_dir: module_dir.into(),
            vars: BTreeMap::new(),
            var_files: Vec::new(),
            env: BTreeMap::new(),
            data_dir: None,
            no_color: default_no_color(),
        }
    }

    /// Bind one input variable
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Bind several input variables at once
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<VarValue>,
    {
        self.vars
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a `-var-file` argument
    pub fn with_var_file(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.var_files.push(path.into());
        self
    }

    /// Set an environment variable for the engine process
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Use an isolated working-state directory (`TF_DATA_DIR`)
    pub fn with_data_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Keep colored engine output (off by default)
    pub fn with_color(mut self) -> Self {
        self.no_color = false;
        self
    }
}
