//! Case Generator
//!
//! Random test cases in the validated format, with reference answers.

pub mod answer;
pub mod batch;
pub mod cases;
pub mod profile;

pub use answer::solve;
pub use batch::{write_batch, CaseRecord};
pub use cases::{generate_case, make_rng};
pub use profile::{GenProfile, QueryMode};
