mod aggregator;
mod league;
mod result;
mod schedule;
mod table;

pub use aggregator::*;
pub use league::*;
pub use result::*;
pub use schedule::*;
pub use table::*;
