mod fixture;
mod report;
mod tracing;

pub use fixture::*;
pub use report::*;
pub use self::tracing::*;
