//! # Weather Models
//!
//! * [`city::City`]: a named location, parsed from `id:name:lat:lon`.
//! * [`report::WeatherReport`]: current conditions for one city.
//! * [`temperature::TemperatureScale`]: maps a reading onto a display band.

pub mod city;
pub mod report;
pub mod temperature;
