//! In-memory storage - used when no database is configured, and in tests.
//!
//! Data is lost on process restart. Each table enforces the same unique
//! constraints as the SQL schema.

mod repositories;
mod table;

pub use repositories::{InMemoryCommentRepository, InMemoryPostRepository, InMemoryUserRepository};
