mod generator;
mod schedule;

pub use generator::*;
pub use schedule::*;
