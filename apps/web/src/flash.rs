//! One-time notices shown on the next rendered page.
//!
//! A redirecting handler stores flashes in a cookie as a `.`-separated
//! list of codes; the page that renders them clears the cookie.

use std::future::{Ready, ready};

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{FromRequest, HttpRequest, dev::Payload};

pub const FLASH_COOKIE: &str = "folio_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    EmailTaken,
    UnknownEmail,
    WrongPassword,
    TitleTaken,
    LoginRequired,
    CommentLoginRequired,
}

impl Flash {
    const ALL: [Flash; 6] = [
        Flash::EmailTaken,
        Flash::UnknownEmail,
        Flash::WrongPassword,
        Flash::TitleTaken,
        Flash::LoginRequired,
        Flash::CommentLoginRequired,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Flash::EmailTaken => "email_taken",
            Flash::UnknownEmail => "unknown_email",
            Flash::WrongPassword => "wrong_password",
            Flash::TitleTaken => "title_taken",
            Flash::LoginRequired => "login_required",
            Flash::CommentLoginRequired => "comment_login_required",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::EmailTaken => "You've already signed up with that email, log in instead!",
            Flash::UnknownEmail => "That email does not exist, please try again.",
            Flash::WrongPassword => "Password incorrect, please try again.",
            Flash::TitleTaken => "This title is already taken. Please create a unique title.",
            Flash::LoginRequired => "Please log in to access this page.",
            Flash::CommentLoginRequired => "You need to login or register to comment.",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }
}

/// Cookie carrying `flashes` to the next request.
pub fn flash_cookie(flashes: &[Flash]) -> Cookie<'static> {
    let value = flashes
        .iter()
        .map(|f| f.code())
        .collect::<Vec<_>>()
        .join(".");

    Cookie::build(FLASH_COOKIE, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn clear_flash_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Flashes left for this request by the previous one.
#[derive(Debug, Clone, Default)]
pub struct Flashes {
    pub messages: Vec<Flash>,
    /// Whether the request carried a flash cookie that needs clearing.
    pub present: bool,
}

impl Flashes {
    pub fn parse(value: &str) -> Self {
        Self {
            messages: value.split('.').filter_map(Flash::from_code).collect(),
            present: true,
        }
    }
}

impl FromRequest for Flashes {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let flashes = req
            .cookie(FLASH_COOKIE)
            .map(|c| Flashes::parse(c.value()))
            .unwrap_or_default();

        ready(Ok(flashes))
    }
}
