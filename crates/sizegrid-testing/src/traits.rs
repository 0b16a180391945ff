use anyhow::Result;
use sizegrid::params::SizeSet;
use sizegrid::runner::CaseReport;

pub trait Suite {
    fn run(&self, sizes: &SizeSet) -> Result<CaseReport>;
}
