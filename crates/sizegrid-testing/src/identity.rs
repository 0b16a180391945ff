use std::cell::Cell;

use anyhow::{ensure, Result};
use sizegrid::fixture::SizeFixture;
use sizegrid::params::SizeSet;
use sizegrid::runner::{run_case, CaseReport};

use crate::traits::Suite;

/// Every injected parameter must come back out of the fixture unchanged,
/// including both boundary widths.
#[derive(Debug)]
pub struct IdentityRoundTrip {}

impl IdentityRoundTrip {
    pub fn new() -> Self {
        Self {}
    }
}

impl Suite for IdentityRoundTrip {
    fn run(&self, sizes: &SizeSet) -> Result<CaseReport> {
        // The boundary values always ride along with the supplied table.
        let mut table: Vec<usize> = sizes.iter().collect();
        table.push(0);
        table.push(usize::MAX);
        let table = SizeSet::values(table);

        let expected: Vec<usize> = table.iter().collect();
        let next = Cell::new(0usize);
        let report = run_case(
            "identity_round_trip",
            &table,
            &|fixture: &SizeFixture| -> Result<()> {
                let idx = next.get();
                next.set(idx + 1);
                let want = expected[idx];
                ensure!(
                    fixture.param() == want,
                    "fixture reported {} for injected param {}",
                    fixture.param(),
                    want
                );
                Ok(())
            },
        );
        Ok(report)
    }
}
