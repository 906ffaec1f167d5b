pub mod report;
pub mod skills;
