pub mod collect;
pub mod daemon;
pub mod feed;
pub mod serve;
