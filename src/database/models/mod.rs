pub mod metric;
pub mod training;

pub use metric::*;
pub use training::*;
