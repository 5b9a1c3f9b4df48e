mod region;
pub mod compound;
pub mod line;
pub mod poly;
pub mod rect;
pub mod vertex;

pub use region::*;
