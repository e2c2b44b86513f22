//! # Folio Core
//!
//! The domain layer of the Folio blog.
//! Entities, the access policy and the ports that storage and
//! authentication adapters implement. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;

pub use error::DomainError;
pub use policy::{AccessPolicy, Capability, Role};
