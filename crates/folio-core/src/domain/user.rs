use serde::{Deserialize, Serialize};

use super::UNSAVED_ID;

/// A registered reader or author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

impl User {
    /// Create an unsaved user. The id is assigned on first save.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: UNSAVED_ID,
            email,
            password_hash,
            name,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == UNSAVED_ID
    }
}
