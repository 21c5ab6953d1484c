mod extractor;
mod scanner;

pub use extractor::*;
pub use scanner::*;
