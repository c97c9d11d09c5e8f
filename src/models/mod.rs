//! Daizy API model types.

mod project;

pub use project::*;
