//! TCP listener bootstrap.

pub mod listener;
