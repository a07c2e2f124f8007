pub mod cli;
pub mod ingest;
pub mod logging;
pub mod record;
pub mod report;
