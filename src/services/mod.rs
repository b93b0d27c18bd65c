pub mod errors;
pub mod jobs;
