mod result;
mod simulator;

pub use result::*;
pub use simulator::*;
