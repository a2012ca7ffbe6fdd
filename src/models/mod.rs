pub mod filter;
pub mod mission;

pub use filter::*;
pub use mission::*;
