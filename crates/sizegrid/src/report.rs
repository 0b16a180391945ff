//! Persists a harness run as a JSON artifact.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::runner::CaseReport;

#[derive(Debug, Serialize, Deserialize)]
pub struct CaseRecord {
    pub name: String,
    pub params_run: usize,
    pub params_failed: Vec<usize>,
}

impl From<&CaseReport> for CaseRecord {
    fn from(report: &CaseReport) -> Self {
        Self {
            name: report.name.clone(),
            params_run: report.outcomes.len(),
            params_failed: report
                .outcomes
                .iter()
                .filter(|o| !o.passed())
                .map(|o| o.param)
                .collect(),
        }
    }
}

/// A summary of one harness run.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub finished_at: String,
    pub seed: Option<u64>,
    pub cases: Vec<CaseRecord>,
}

impl RunReport {
    pub fn new(seed: Option<u64>, reports: &[CaseReport]) -> Self {
        Self {
            finished_at: chrono::Utc::now().to_rfc3339(),
            seed,
            cases: reports.iter().map(CaseRecord::from).collect(),
        }
    }

    pub fn passed(&self) -> bool {
        self.cases.iter().all(|c| c.params_failed.is_empty())
    }
}

pub fn write_report(path: impl AsRef<Path>, report: &RunReport) -> Result<()> {
    let path = path.as_ref();
    let mut handle =
        File::create(path).context(format!("Opening report file {}", path.display()))?;
    handle
        .write_all(
            serde_json::to_string_pretty(report)
                .context("Serializing run report")?
                .as_bytes(),
        )
        .context("Writing run report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CaseOutcome;

    fn sample_report() -> CaseReport {
        CaseReport {
            name: "identity_round_trip".to_string(),
            outcomes: vec![
                CaseOutcome {
                    param: 0,
                    error: None,
                },
                CaseOutcome {
                    param: 4096,
                    error: Some("boom".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_case_record_flattens_failures() {
        let record = CaseRecord::from(&sample_report());
        assert_eq!(record.name, "identity_round_trip");
        assert_eq!(record.params_run, 2);
        assert_eq!(record.params_failed, vec![4096]);
    }

    #[test]
    fn test_run_report_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");

        let report = RunReport::new(Some(7), &[sample_report()]);
        write_report(&path, &report).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: RunReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.cases.len(), 1);
        assert!(!parsed.passed());
    }
}
