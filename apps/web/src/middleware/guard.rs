//! Authorization guards.
//!
//! `Allowed<R>` runs before the handler body: it resolves the session,
//! checks the capability named by `R` against the access policy and only
//! then lets the handler run. Anonymous callers are redirected to the login
//! page; authenticated callers without the role get 403.

use std::marker::PhantomData;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};

use folio_core::domain::Identity;
use folio_core::{Capability, DomainError};

use super::error::AppError;
use super::session::{CurrentUser, ResolveFuture};
use crate::flash::Flash;
use crate::state::AppState;

/// Check `capability` for `identity`, mapping failures to responses.
pub fn authorize(
    state: &AppState,
    identity: Option<&Identity>,
    capability: Capability,
) -> Result<Identity, AppError> {
    match state.policy.authorize(identity, capability) {
        Ok(_) => identity.cloned().ok_or(AppError::Forbidden),
        Err(DomainError::Unauthenticated) => {
            tracing::info!(?capability, "Anonymous request needs a login");
            let flash = match capability {
                Capability::Comment => Flash::CommentLoginRequired,
                _ => Flash::LoginRequired,
            };
            Err(AppError::LoginRequired(flash))
        }
        Err(e) => {
            tracing::warn!(
                user_id = identity.map(|i| i.user_id),
                ?capability,
                "Access denied"
            );
            Err(e.into())
        }
    }
}

/// Names the capability an `Allowed` guard checks.
pub trait Requirement {
    const CAPABILITY: Capability;
}

pub mod can {
    use super::{Capability, Requirement};

    pub struct CreatePost;
    pub struct EditPost;
    pub struct DeletePost;
    pub struct DeleteComment;

    impl Requirement for CreatePost {
        const CAPABILITY: Capability = Capability::CreatePost;
    }

    impl Requirement for EditPost {
        const CAPABILITY: Capability = Capability::EditPost;
    }

    impl Requirement for DeletePost {
        const CAPABILITY: Capability = Capability::DeletePost;
    }

    impl Requirement for DeleteComment {
        const CAPABILITY: Capability = Capability::DeleteComment;
    }
}

/// An identity that passed the `R` check.
#[derive(Debug)]
pub struct Allowed<R> {
    pub identity: Identity,
    _requirement: PhantomData<R>,
}

impl<R: Requirement + 'static> FromRequest for Allowed<R> {
    type Error = AppError;
    type Future = ResolveFuture<Self>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let current = CurrentUser::resolve(req);
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let current = current.await?;
            let Some(state) = state else {
                tracing::error!("AppState not found in app data");
                return Err(AppError::Internal("Server configuration error".to_string()));
            };

            authorize(&state, current.identity(), R::CAPABILITY).map(|identity| Allowed {
                identity,
                _requirement: PhantomData,
            })
        })
    }
}
