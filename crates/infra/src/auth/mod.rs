//! Local credential store and session provider

mod service;

pub use service::LocalSessionProvider;
