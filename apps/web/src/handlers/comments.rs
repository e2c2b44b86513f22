//! Comment handlers.

use actix_web::{HttpResponse, web};

use folio_core::Capability;
use folio_core::DomainError;
use folio_core::domain::Comment;
use folio_shared::dto::CommentForm;

use super::{fetch_post, post_detail};
use crate::flash::Flashes;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::guard::{Allowed, authorize, can};
use crate::middleware::session::CurrentUser;
use crate::render::{PageContext, redirect};
use crate::state::AppState;

/// POST /requested_post/{post_id}
///
/// Anyone may read a post, but only a logged-in user may comment. An
/// anonymous submission is dropped and the caller is sent to log in.
pub async fn add_comment(
    state: web::Data<AppState>,
    user: CurrentUser,
    flashes: Flashes,
    path: web::Path<i32>,
    form: web::Form<CommentForm>,
) -> AppResult<HttpResponse> {
    let post = fetch_post(&state, path.into_inner()).await?;

    let form = form.into_inner();
    form.validate().map_err(AppError::Validation)?;

    let author = authorize(&state, user.identity(), Capability::Comment)?;

    let comment = state
        .comments
        .save(Comment::new(author.user_id, post.id, form.comment_text))
        .await?;
    tracing::info!(
        comment_id = comment.id,
        post_id = post.id,
        author_id = author.user_id,
        "Comment added"
    );

    let detail = post_detail(&state, post).await?;
    Ok(PageContext::new(Some(&author), flashes, &state.policy).render("post", detail))
}

/// GET /delete_comment/{comment_id}
pub async fn delete_comment(
    state: web::Data<AppState>,
    allowed: Allowed<can::DeleteComment>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let comment_id = path.into_inner();
    let comment = state
        .comments
        .find_by_id(comment_id)
        .await?
        .ok_or(DomainError::not_found("Comment", comment_id))?;

    state.comments.delete(comment.id).await?;

    tracing::info!(
        comment_id = comment.id,
        admin_id = allowed.identity.user_id,
        "Comment deleted"
    );
    Ok(redirect("/get_all_blog_posts"))
}
