//! Page view models.
//!
//! Each page handler answers with a `Page` naming the view and carrying
//! everything a template needs to draw it.

use serde::{Deserialize, Serialize};

use crate::dto::PostForm;

/// Envelope shared by every rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub view: String,
    pub year: i32,
    pub current_user: Option<UserSummary>,
    pub is_admin: bool,
    pub flashes: Vec<String>,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
}

/// A post as listed on the index and archive pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub date: String,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<PostSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: i32,
    pub text: String,
    pub author: Option<String>,
}

/// A single post with its comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub date: String,
    pub body: String,
    pub author: Option<String>,
    pub comments: Vec<CommentView>,
}

/// The create/edit post form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEditor {
    pub is_edit: bool,
    pub post_id: Option<i32>,
    pub form: PostForm,
}

/// Login and register forms echo back the email only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthForm {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactPage {
    /// Token of the third-party form-submission service.
    pub form_api_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Empty {}
