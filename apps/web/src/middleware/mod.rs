//! Request guards, session handling and error responses.

pub mod error;
pub mod guard;
pub mod session;
