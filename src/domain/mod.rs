//! # Domain Layer
//!
//! Shipping rate rules, free of I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
