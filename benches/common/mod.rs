pub mod crossings;
pub mod samples;
