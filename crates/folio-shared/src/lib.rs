//! # Folio Shared
//!
//! Types shared between the server and whatever renders its pages:
//! submitted forms, page view models and error documents.

pub mod dto;
pub mod response;
pub mod view;

pub use response::ErrorResponse;
pub use view::Page;
