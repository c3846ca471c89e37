//! AI-assisted meal analysis use cases

pub mod ports;
mod service;

pub use ports::MealAnalyzer;
pub use service::AnalysisService;
