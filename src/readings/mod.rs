mod service;

pub use service::ReadingService;
