pub mod fixture;
pub mod params;
pub mod report;
pub mod runner;
