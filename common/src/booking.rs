//! # Booking Models
//!
//! The data a tour application is made of.
//!
//! ## Reference Data
//! * [`tour::Tour`] and [`tour::Excursion`]: read-only lists fetched from the backend.
//!
//! ## Form Data
//! * [`form::Field`]: the top-level fields of the registration form.
//! * [`tourist::Tourist`]: one traveller, addressed by a stable [`tourist::TouristId`].
//! * [`form::Application`]: the payload persisted by the backend.
//!
//! ## Feedback
//! * [`notification::Notification`]: a transient success/error banner.

pub mod form;
pub mod notification;
pub mod tour;
pub mod tourist;
