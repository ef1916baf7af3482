//! Data models for lookup results.
//!
//! This module contains the data structures exchanged with the postal code
//! lookup service.

pub mod address;

pub use address::{Address, ViaCepResponse};
