mod metric;
mod record;

pub use metric::*;
pub use record::*;
