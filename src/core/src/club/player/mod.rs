mod collection;
mod player;
mod position;

pub use collection::*;
pub use player::*;
pub use position::*;
