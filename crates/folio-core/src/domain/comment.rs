use serde::{Deserialize, Serialize};

use super::UNSAVED_ID;

/// A reader's comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub author_id: i32,
    pub post_id: i32,
    pub text: String,
}

impl Comment {
    pub fn new(author_id: i32, post_id: i32, text: String) -> Self {
        Self {
            id: UNSAVED_ID,
            author_id,
            post_id,
            text,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == UNSAVED_ID
    }
}
