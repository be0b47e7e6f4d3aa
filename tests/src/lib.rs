#![cfg(test)]

mod adapters;
mod booking;
mod support;
