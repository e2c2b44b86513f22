//! Session cookie and the request-scoped identity.

use std::future::Future;
use std::pin::Pin;

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};

use folio_core::domain::Identity;
use folio_core::ports::AuthError;

use super::error::AppError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "folio_session";

pub fn session_cookie(token: String, lifetime_seconds: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(lifetime_seconds))
        .finish()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Session resolution runs before the handler and may hit the store.
pub type ResolveFuture<T> = Pin<Box<dyn Future<Output = Result<T, AppError>>>>;

/// The identity behind the current request, if logged in.
///
/// A missing, expired or tampered session cookie all read as anonymous, as
/// does a valid token for a user that is no longer in the store. The
/// identity is rebuilt from the stored user, so a renamed user shows the
/// new name.
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<Identity>);

impl CurrentUser {
    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }

    pub(crate) fn resolve(req: &HttpRequest) -> ResolveFuture<Self> {
        let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let Some(token) = token else {
                return Ok(Self(None));
            };

            let Some(state) = state else {
                tracing::error!("AppState not found in app data");
                return Err(AppError::Internal("Server configuration error".to_string()));
            };

            let claims = match state.sessions.validate(&token) {
                Ok(claims) => claims,
                Err(AuthError::SessionExpired) => {
                    tracing::debug!("Session expired, treating request as anonymous");
                    return Ok(Self(None));
                }
                Err(e) => {
                    tracing::warn!("Rejected session cookie: {}", e);
                    return Ok(Self(None));
                }
            };

            let user_id = claims.identity.user_id;
            match state.users.find_by_id(user_id).await? {
                Some(user) => Ok(Self(Some(Identity::from(&user)))),
                None => {
                    tracing::warn!(user_id, "Session names a user that does not exist");
                    Ok(Self(None))
                }
            }
        })
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = ResolveFuture<Self>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        Self::resolve(req)
    }
}
