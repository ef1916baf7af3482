//! Application service layer.
//!
//! Services contain business logic on top of the repositories. They provide
//! a clean boundary between the MCP handlers and the data access layer.

mod address_service;

pub use address_service::{AddressService, AddressServiceImpl};
