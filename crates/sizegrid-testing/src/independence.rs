use anyhow::{ensure, Result};
use sizegrid::fixture::SizeFixture;
use sizegrid::params::SizeSet;
use sizegrid::runner::{run_case, CaseReport};

use crate::traits::Suite;

/// Fixtures built with different parameters in the same run must not
/// disturb one another.
#[derive(Debug)]
pub struct InstanceIndependence {}

impl InstanceIndependence {
    pub fn new() -> Self {
        Self {}
    }
}

impl Suite for InstanceIndependence {
    fn run(&self, sizes: &SizeSet) -> Result<CaseReport> {
        let report = run_case(
            "instance_independence",
            sizes,
            &|fixture: &SizeFixture| -> Result<()> {
                let before = fixture.param();

                // A crowd of siblings with nearby parameter values.
                let siblings: Vec<SizeFixture> = (0..8usize)
                    .map(|ii| SizeFixture::new(before.wrapping_add(ii + 1)))
                    .collect();

                for (ii, sibling) in siblings.iter().enumerate() {
                    ensure!(
                        sibling.param() == before.wrapping_add(ii + 1),
                        "sibling {} lost its own param",
                        ii
                    );
                }
                ensure!(
                    fixture.param() == before,
                    "sibling construction disturbed the fixture under test"
                );
                Ok(())
            },
        );
        Ok(report)
    }
}
