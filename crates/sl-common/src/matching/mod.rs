pub mod scoring;
pub mod skills;
pub mod weights;
