//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.

pub mod fs;
