//! HTTP adapters for the outbound ports of `tourbook-core`.

pub mod backend;
pub mod emailjs;
pub mod http;
pub mod openweather;
