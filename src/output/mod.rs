mod chart;
mod series;
mod writer;

pub use chart::*;
pub use series::*;
pub use writer::*;
