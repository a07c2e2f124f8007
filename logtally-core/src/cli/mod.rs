mod args;
mod report;

pub use args::*;
pub use report::*;
