pub mod providers;

mod summarizer;

pub use summarizer::Summarizer;
