mod service;

pub use service::CollectorService;
