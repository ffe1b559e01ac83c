//! Shared test utilities for brokkr-terraform integration tests

pub mod assertions;
pub mod mock_engine;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use mock_engine::*;

use brokkr_terraform::{utils, ProvisioningEngine};
use camino::Utf8PathBuf;

/// Initialise test logging once per binary; repeat calls are no-ops
#[allow(dead_code)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Path to a fixture module under tests/fixtures
#[allow(dead_code)]
pub fn fixture_dir(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Skip test if the engine is not installed
#[allow(dead_code)]
pub fn skip_if_not_installed<E: ProvisioningEngine>(engine: &E) -> bool {
    if !engine.check_installed() {
        eprintln!("Skipping test: {} not installed", engine.name());
        true
    } else {
        false
    }
}

/// Skip test if AWS credentials are not configured
#[allow(dead_code)]
pub fn skip_if_no_aws_credentials() -> bool {
    if !utils::check_aws_credentials() {
        eprintln!("Skipping test: AWS credentials not configured");
        true
    } else {
        false
    }
}

/// Generate a unique name for test resources
#[allow(dead_code)]
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, utils::generate_run_id())
}

/// UTF-8 path to a per-test working-state directory.
///
/// Each test case keeps its own `TF_DATA_DIR` so parallel cases against
/// the same fixture module never share plugin caches or lock files.
#[allow(dead_code)]
pub fn test_data_dir(tmp: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("temp dir path is not UTF-8")
}
