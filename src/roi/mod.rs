mod roi;
pub mod shape;

pub use roi::*;
