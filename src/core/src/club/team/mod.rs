mod builder;
mod rating;
mod statistics;
mod team;

pub use builder::*;
pub use rating::*;
pub use statistics::*;
pub use team::*;
