//! The table-driven driver: one fresh fixture per table entry, outcomes
//! collected rather than short-circuited.

use anyhow::{bail, Result};
use derive_more::Display;
use log::{debug, info};

use crate::fixture::{SizeFixture, SizedCase};
use crate::params::SizeSet;

/// The outcome of one fixture instantiation.
#[derive(Debug, Clone, Display)]
#[display(fmt = "CaseOutcome(param={}, error={:?})", param, error)]
pub struct CaseOutcome {
    pub param: usize,
    pub error: Option<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Every outcome of one case family run across a size table.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub outcomes: Vec<CaseOutcome>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CaseOutcome::passed)
    }

    pub fn failures(&self) -> Vec<&CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed()).collect()
    }

    /// `Ok` iff every parameter value passed; otherwise an error naming
    /// the failing values.
    pub fn into_result(self) -> Result<()> {
        let failing: Vec<String> = self
            .outcomes
            .iter()
            .filter(|o| !o.passed())
            .map(|o| o.param.to_string())
            .collect();
        if failing.is_empty() {
            Ok(())
        } else {
            bail!(
                "case {} failed for params [{}]",
                self.name,
                failing.join(", ")
            )
        }
    }
}

/// Runs `case` once per entry in `set`, each time against a fresh fixture.
///
/// A failure at one value is recorded and never stops the remaining
/// values from running. An empty set yields an empty, passing report.
pub fn run_case(name: &str, set: &SizeSet, case: &impl SizedCase) -> CaseReport {
    let mut outcomes = Vec::with_capacity(set.len());
    for param in set.iter() {
        let fixture = SizeFixture::new(param);
        let outcome = match case.run(&fixture) {
            Ok(()) => CaseOutcome { param, error: None },
            Err(e) => CaseOutcome {
                param,
                error: Some(format!("{:#}", e)),
            },
        };
        debug!("case {}; outcome = {}", name, outcome);
        outcomes.push(outcome);
    }

    let report = CaseReport {
        name: name.to_string(),
        outcomes,
    };
    info!(
        "case {} finished; {} of {} params passed",
        name,
        report.outcomes.iter().filter(|o| o.passed()).count(),
        report.outcomes.len()
    );
    report
}
