pub mod ai;
pub mod collector;
pub mod config;
pub mod error;
pub mod feed;
pub mod filter;
pub mod ingest;
pub mod scheduler;
pub mod storage;
pub mod text;
pub mod validate;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use ingest::{IngestOutcome, Ingestor};
pub use validate::{SkipReason, SummaryPolicy};
