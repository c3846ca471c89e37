//! Session provider boundary

pub mod ports;

pub use ports::SessionProvider;
