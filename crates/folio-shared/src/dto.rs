//! Form submissions - `application/x-www-form-urlencoded` bodies.
//!
//! Every field is required. `validate` returns one message per failing
//! field, in field order.

use serde::{Deserialize, Serialize};

fn require(errors: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{field} is required"));
    }
}

fn require_email(errors: &mut Vec<String>, value: &str) {
    if value.trim().is_empty() {
        errors.push("email is required".to_string());
    } else if !value.contains('@') {
        errors.push("email must be a valid email address".to_string());
    }
}

fn into_result(errors: Vec<String>) -> Result<(), Vec<String>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Sign-up form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        require_email(&mut errors, &self.email);
        require(&mut errors, "password", &self.password);
        require(&mut errors, "name", &self.name);
        into_result(errors)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        require_email(&mut errors, &self.email);
        require(&mut errors, "password", &self.password);
        into_result(errors)
    }
}

/// Create and edit form for posts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub body: String,
}

impl PostForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        require(&mut errors, "title", &self.title);
        require(&mut errors, "subtitle", &self.subtitle);
        require(&mut errors, "img_url", &self.img_url);
        require(&mut errors, "body", &self.body);
        into_result(errors)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentForm {
    pub comment_text: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        require(&mut errors, "comment_text", &self.comment_text);
        into_result(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_form_reports_each_missing_field() {
        let form = RegisterForm {
            email: "   ".to_string(),
            password: String::new(),
            name: "Ada".to_string(),
        };

        assert_eq!(
            form.validate(),
            Err(vec![
                "email is required".to_string(),
                "password is required".to_string()
            ])
        );
    }

    #[test]
    fn test_login_form_rejects_email_without_at() {
        let form = LoginForm {
            email: "ada.example.com".to_string(),
            password: "pw".to_string(),
        };

        assert_eq!(
            form.validate(),
            Err(vec!["email must be a valid email address".to_string()])
        );
    }

    #[test]
    fn test_post_form_valid() {
        let form = PostForm {
            title: "Golden hour".to_string(),
            subtitle: "Chasing light".to_string(),
            img_url: "https://img.example/g.jpg".to_string(),
            body: "<p>Hello</p>".to_string(),
        };

        assert!(form.validate().is_ok());
        assert_eq!(
            PostForm::default().validate().unwrap_err().len(),
            4
        );
    }

    #[test]
    fn test_blank_comment_is_rejected() {
        let form = CommentForm {
            comment_text: "\n".to_string(),
        };

        assert!(form.validate().is_err());
    }
}
