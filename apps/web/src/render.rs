//! Page rendering.
//!
//! Pages are answered as JSON view models (`folio_shared::Page`); a
//! template layer in front of the server turns them into HTML.

use actix_web::HttpResponse;
use chrono::Datelike;
use serde::Serialize;

use folio_core::AccessPolicy;
use folio_core::domain::Identity;
use folio_shared::Page;
use folio_shared::view::UserSummary;

use crate::flash::{Flash, Flashes, clear_flash_cookie, flash_cookie};

/// Everything a page needs besides its own data.
pub struct PageContext {
    current_user: Option<UserSummary>,
    is_admin: bool,
    flashes: Vec<Flash>,
    clear_flash_cookie: bool,
}

impl PageContext {
    pub fn new(identity: Option<&Identity>, flashes: Flashes, policy: &AccessPolicy) -> Self {
        Self {
            current_user: identity.map(|i| UserSummary {
                id: i.user_id,
                name: i.name.clone(),
            }),
            is_admin: policy.is_admin(identity),
            flashes: flashes.messages,
            clear_flash_cookie: flashes.present,
        }
    }

    /// Show `flash` on the page being rendered now.
    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flashes.push(flash);
        self
    }

    pub fn render<T: Serialize>(self, view: &str, data: T) -> HttpResponse {
        let page = Page {
            view: view.to_string(),
            year: chrono::Local::now().year(),
            current_user: self.current_user,
            is_admin: self.is_admin,
            flashes: self.flashes.iter().map(|f| f.message().to_string()).collect(),
            data,
        };

        let mut response = HttpResponse::Ok();
        if self.clear_flash_cookie {
            response.cookie(clear_flash_cookie());
        }
        response.json(page)
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", location))
        .finish()
}

/// Redirect and leave `flash` for the page at `location`.
pub fn redirect_with_flash(location: &str, flash: Flash) -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", location))
        .cookie(flash_cookie(&[flash]))
        .finish()
}
