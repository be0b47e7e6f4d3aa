//! # Tourbook Common
//!
//! Types shared by every layer of the workspace.
//!
//! * **[`booking`]**: tours, excursions, tourists, form fields and notifications.
//! * **[`weather`]**: cities, weather readings and the temperature colour scale.
//! * **[`validation`]**: pure rules mapping raw input to an error message (`""` = valid).
//! * **[`config`]**: runtime configuration handed to adapters at construction time.
//! * **[`error`]**: error types crossing crate boundaries.

pub mod booking;
pub mod config;
pub mod error;
pub mod validation;
pub mod weather;
