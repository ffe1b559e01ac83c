//! Plan output parsing
//!
//! Terraform prints a one-line change-set summary at the end of a
//! successful plan ("Plan: 3 to add, 0 to change, 0 to destroy."), or a
//! "No changes." banner when the configuration matches the live state.

use serde::{Deserialize, Serialize};

/// Parsed summary of a computed plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Resources the plan would create
    pub add: u32,

    /// Resources the plan would modify in place
    pub change: u32,

    /// Resources the plan would destroy
    pub destroy: u32,

    /// Full plan output, kept for content assertions and diagnostics
    pub raw: String,
}

impl PlanSummary {
    /// Whether the plan proposes any changes at all
    pub fn has_changes(&self) -> bool {
        self.add + self.change + self.destroy > 0
    }
}

/// Parse the change-set summary from plan output.
///
/// Output with neither a "Plan:" line nor a "No changes." banner (e.g. a
/// refresh-only run) parses as zero changes; the raw text is kept either
/// way.
pub fn parse_plan_summary(output: &str) -> PlanSummary {
    let mut summary = PlanSummary {
        add: 0,
        change: 0,
        destroy: 0,
        raw: output.to_string(),
    };

    for line in output.lines() {
        let line = line.trim();
        if !line.starts_with("Plan:") {
            continue;
        }

        // "Plan: 3 to add, 0 to change, 0 to destroy."
        for segment in line.trim_start_matches("Plan:").split(',') {
            let mut words = segment.split_whitespace();
            let count = match words.next().and_then(|w| w.parse::<u32>().ok()) {
                Some(n) => n,
                None => continue,
            };
            let action = words.last().map(|w| w.trim_end_matches('.'));
            match action {
                Some("add") => summary.add = count,
                Some("change") => summary.change = count,
                Some("destroy") => summary.destroy = count,
                _ => {}
            }
        }
        break;
    }

    summary
}
