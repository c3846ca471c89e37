//! HTTP client with timeout and retry support

mod client;

pub use client::{HttpClient, HttpClientBuilder};
