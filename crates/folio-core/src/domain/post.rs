use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UNSAVED_ID;

/// Display format of the post creation date, e.g. `October 16, 2026`.
pub const POST_DATE_FORMAT: &str = "%B %d, %Y";

/// Post entity - a blog article written by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    /// Creation date, already formatted for display.
    pub date: String,
    pub body: String,
}

/// The user-editable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub body: String,
}

impl Post {
    /// Create an unsaved post dated `created_on`.
    pub fn new(author_id: i32, draft: PostDraft, created_on: NaiveDate) -> Self {
        Self {
            id: UNSAVED_ID,
            author_id,
            title: draft.title,
            subtitle: draft.subtitle,
            img_url: draft.img_url,
            date: created_on.format(POST_DATE_FORMAT).to_string(),
            body: draft.body,
        }
    }

    /// Overwrite every editable field and hand authorship to `editor_id`.
    /// The creation date is kept.
    pub fn apply_edit(&mut self, editor_id: i32, draft: PostDraft) {
        self.title = draft.title;
        self.subtitle = draft.subtitle;
        self.img_url = draft.img_url;
        self.body = draft.body;
        self.author_id = editor_id;
    }

    pub fn is_new(&self) -> bool {
        self.id == UNSAVED_ID
    }
}
