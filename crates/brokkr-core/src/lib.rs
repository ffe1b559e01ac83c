//! Core library for Brokkr
//!
//! Brokkr is a test harness for declaratively-defined infrastructure
//! modules: build a configuration record of input variables, have an
//! external provisioning engine validate and plan the module, and
//! guarantee teardown on every exit path.
//!
//! This crate holds the pieces shared by every engine wrapper:
//!
//! - [`ModuleConfig`] - the pairing of a module's on-disk location with
//!   its resolved input variable values for a single test invocation
//! - [`VarValue`] - the variable value domain (scalars, sequences, and
//!   nested mappings), with `-var` argument rendering
//! - [`Error`] - the error taxonomy: configuration errors diagnosed by
//!   the engine, invocation failures, engine failures, and teardown
//!   failures

pub mod config;
pub mod error;
pub mod vars;

pub use config::ModuleConfig;
pub use error::{Error, Result};
pub use vars::VarValue;
