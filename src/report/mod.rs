//! Report rendering and persistence.

pub mod generator;
pub mod writer;

pub use generator::*;
pub use writer::*;
