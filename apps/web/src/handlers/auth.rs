//! Account handlers: register, login, logout.

use actix_web::{HttpResponse, web};

use folio_core::domain::{Identity, User};
use folio_core::error::RepoError;
use folio_infra::mask_email;
use folio_shared::dto::{LoginForm, RegisterForm};
use folio_shared::view::AuthForm;

use crate::flash::{Flash, Flashes};
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::{CurrentUser, clear_session_cookie, session_cookie};
use crate::render::{PageContext, redirect_with_flash};
use crate::state::AppState;

/// Redirect to the archive with a fresh session for `user`.
fn start_session(state: &AppState, user: &User) -> AppResult<HttpResponse> {
    let token = state.sessions.issue(&Identity::from(user))?;

    Ok(HttpResponse::Found()
        .insert_header(("Location", "/get_all_blog_posts"))
        .cookie(session_cookie(token, state.sessions.lifetime_seconds()))
        .finish())
}

/// GET /register
pub async fn register_form(
    state: web::Data<AppState>,
    user: CurrentUser,
    flashes: Flashes,
) -> HttpResponse {
    PageContext::new(user.identity(), flashes, &state.policy).render("register", AuthForm::default())
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    form: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    form.validate().map_err(AppError::Validation)?;

    if state.users.find_by_email(&form.email).await?.is_some() {
        tracing::info!(user_email = %mask_email(&form.email), "Email already registered");
        return Ok(redirect_with_flash("/login", Flash::EmailTaken));
    }

    let password_hash = state.passwords.hash(&form.password)?;

    let user = match state
        .users
        .save(User::new(form.email, form.name, password_hash))
        .await
    {
        Ok(user) => user,
        // Lost a race with a concurrent sign-up for the same email.
        Err(RepoError::Constraint(_)) => {
            return Ok(redirect_with_flash("/login", Flash::EmailTaken));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = user.id, "User registered");
    start_session(&state, &user)
}

/// GET /login
pub async fn login_form(
    state: web::Data<AppState>,
    user: CurrentUser,
    flashes: Flashes,
) -> HttpResponse {
    PageContext::new(user.identity(), flashes, &state.policy).render("login", AuthForm::default())
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    form.validate().map_err(AppError::Validation)?;

    let Some(user) = state.users.find_by_email(&form.email).await? else {
        tracing::info!(user_email = %mask_email(&form.email), "Login for unknown email");
        return Ok(redirect_with_flash("/login", Flash::UnknownEmail));
    };

    if !state.passwords.verify(&form.password, &user.password_hash)? {
        tracing::info!(user_id = user.id, "Login with wrong password");
        return Ok(redirect_with_flash("/login", Flash::WrongPassword));
    }

    tracing::info!(user_id = user.id, "User logged in");
    start_session(&state, &user)
}

/// GET /logout
pub async fn logout(user: CurrentUser) -> HttpResponse {
    if let Some(identity) = user.identity() {
        tracing::info!(user_id = identity.user_id, "User logged out");
    }

    HttpResponse::Found()
        .insert_header(("Location", "/get_all_blog_posts"))
        .cookie(clear_session_cookie())
        .finish()
}
