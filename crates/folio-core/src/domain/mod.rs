//! Domain entities - the core business objects.

mod comment;
mod identity;
mod post;
mod user;

pub use comment::Comment;
pub use identity::Identity;
pub use post::{Post, PostDraft, POST_DATE_FORMAT};
pub use user::User;

/// Id carried by an entity that has not been persisted yet.
/// Storage assigns real ids starting at 1.
pub const UNSAVED_ID: i32 = 0;
