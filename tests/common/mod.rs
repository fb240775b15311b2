//! Shared test support

pub mod builders;
