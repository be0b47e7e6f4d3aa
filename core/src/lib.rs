//! Booking logic: form state, reference data, submission and weather.
//!
//! Nothing in this crate performs I/O directly. Remote calls go through the traits in
//! [`ports`], implemented by `tourbook-protocols` and by test fakes.

pub mod catalog;
pub mod form;
pub mod notifier;
pub mod ports;
pub mod query;
pub mod session;
pub mod submission;
pub mod weather;
