mod fetcher;
mod models;
mod parser;

pub use fetcher::FeedFetcher;
pub use models::{Candidate, Headline};
pub use parser::parse_headlines;
