//! Public pages.

use actix_web::{HttpResponse, web};

use folio_shared::view::{ContactPage, Empty, PostList};

use super::post_summaries;
use crate::flash::Flashes;
use crate::middleware::error::AppResult;
use crate::middleware::session::CurrentUser;
use crate::render::PageContext;
use crate::state::AppState;

/// GET / - every post, oldest first.
pub async fn index(
    state: web::Data<AppState>,
    user: CurrentUser,
    flashes: Flashes,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let posts = post_summaries(&state, posts).await?;

    Ok(PageContext::new(user.identity(), flashes, &state.policy).render("index", PostList { posts }))
}

/// GET /get_all_blog_posts - every post, newest first.
pub async fn all_posts(
    state: web::Data<AppState>,
    user: CurrentUser,
    flashes: Flashes,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list_newest_first().await?;
    let posts = post_summaries(&state, posts).await?;

    Ok(PageContext::new(user.identity(), flashes, &state.policy)
        .render("blog_posts", PostList { posts }))
}

pub async fn about(state: web::Data<AppState>, user: CurrentUser, flashes: Flashes) -> HttpResponse {
    PageContext::new(user.identity(), flashes, &state.policy).render("about", Empty::default())
}

pub async fn footer(state: web::Data<AppState>, user: CurrentUser, flashes: Flashes) -> HttpResponse {
    PageContext::new(user.identity(), flashes, &state.policy).render("footer", Empty::default())
}

/// GET/POST /contact - the form itself posts to the third-party service.
pub async fn contact(
    state: web::Data<AppState>,
    user: CurrentUser,
    flashes: Flashes,
) -> HttpResponse {
    PageContext::new(user.identity(), flashes, &state.policy).render(
        "contact",
        ContactPage {
            form_api_token: state.contact_form_token.clone(),
        },
    )
}
