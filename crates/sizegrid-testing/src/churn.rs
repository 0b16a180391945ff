use anyhow::{ensure, Result};
use sizegrid::fixture::SizeFixture;
use sizegrid::params::SizeSet;
use sizegrid::runner::{run_case, CaseReport};

use crate::traits::Suite;

/// Construct-and-drop bursts of 0, 1, and N fixtures must leave no
/// observable residue behind.
#[derive(Debug)]
pub struct ConstructionChurn {}

impl ConstructionChurn {
    pub fn new() -> Self {
        Self {}
    }
}

impl Suite for ConstructionChurn {
    fn run(&self, sizes: &SizeSet) -> Result<CaseReport> {
        let report = run_case(
            "construction_churn",
            sizes,
            &|fixture: &SizeFixture| -> Result<()> {
                for burst in [0usize, 1, 100] {
                    for _ in 0..burst {
                        let scratch = SizeFixture::new(fixture.param());
                        ensure!(
                            scratch.param() == fixture.param(),
                            "scratch fixture dropped its param during a burst of {}",
                            burst
                        );
                        drop(scratch);
                    }
                    // A fresh instance after each burst still round-trips.
                    ensure!(
                        SizeFixture::new(fixture.param()).param() == fixture.param(),
                        "fresh fixture disagrees after a burst of {}",
                        burst
                    );
                }
                Ok(())
            },
        );
        Ok(report)
    }
}
