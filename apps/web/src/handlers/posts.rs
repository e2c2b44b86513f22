//! Post handlers: read, create, edit, delete.

use actix_web::{HttpResponse, web};

use folio_core::domain::{Post, PostDraft};
use folio_shared::dto::PostForm;
use folio_shared::view::PostEditor;

use super::{fetch_post, post_detail};
use crate::flash::{Flash, Flashes};
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::guard::{Allowed, can};
use crate::middleware::session::CurrentUser;
use crate::render::{PageContext, redirect};
use crate::state::AppState;

fn draft(form: PostForm) -> PostDraft {
    PostDraft {
        title: form.title,
        subtitle: form.subtitle,
        img_url: form.img_url,
        body: form.body,
    }
}

/// GET /requested_post/{post_id}
pub async fn show_post(
    state: web::Data<AppState>,
    user: CurrentUser,
    flashes: Flashes,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = fetch_post(&state, path.into_inner()).await?;
    let detail = post_detail(&state, post).await?;

    Ok(PageContext::new(user.identity(), flashes, &state.policy).render("post", detail))
}

/// GET /new-post
pub async fn new_post_form(
    state: web::Data<AppState>,
    allowed: Allowed<can::CreatePost>,
    flashes: Flashes,
) -> HttpResponse {
    PageContext::new(Some(&allowed.identity), flashes, &state.policy).render(
        "create_post",
        PostEditor {
            is_edit: false,
            post_id: None,
            form: PostForm::default(),
        },
    )
}

/// POST /new-post
///
/// The title check and the insert are not atomic; a concurrent duplicate
/// is stopped by the unique constraint and answered with 409.
pub async fn create_post(
    state: web::Data<AppState>,
    allowed: Allowed<can::CreatePost>,
    flashes: Flashes,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    form.validate().map_err(AppError::Validation)?;

    if state.posts.find_by_title(&form.title).await?.is_some() {
        tracing::info!(title = %form.title, "Rejected post with a taken title");
        return Ok(PageContext::new(Some(&allowed.identity), flashes, &state.policy)
            .with_flash(Flash::TitleTaken)
            .render(
                "create_post",
                PostEditor {
                    is_edit: false,
                    post_id: None,
                    form,
                },
            ));
    }

    let today = chrono::Local::now().date_naive();
    let post = Post::new(allowed.identity.user_id, draft(form), today);
    let post = state.posts.save(post).await?;

    tracing::info!(
        post_id = post.id,
        author_id = post.author_id,
        "Post created"
    );
    Ok(redirect("/get_all_blog_posts"))
}

/// GET /edit_post/{post_id} - the create form, prefilled.
pub async fn edit_post_form(
    state: web::Data<AppState>,
    allowed: Allowed<can::EditPost>,
    flashes: Flashes,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = fetch_post(&state, path.into_inner()).await?;

    Ok(PageContext::new(Some(&allowed.identity), flashes, &state.policy).render(
        "create_post",
        PostEditor {
            is_edit: true,
            post_id: Some(post.id),
            form: PostForm {
                title: post.title,
                subtitle: post.subtitle,
                img_url: post.img_url,
                body: post.body,
            },
        },
    ))
}

/// POST /edit_post/{post_id}
///
/// Overwrites every editable field and makes the editor the author. The
/// title is not re-checked here; only the unique constraint guards it.
pub async fn update_post(
    state: web::Data<AppState>,
    allowed: Allowed<can::EditPost>,
    path: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let mut post = fetch_post(&state, path.into_inner()).await?;

    let form = form.into_inner();
    form.validate().map_err(AppError::Validation)?;

    post.apply_edit(allowed.identity.user_id, draft(form));
    let post = state.posts.save(post).await?;

    tracing::info!(post_id = post.id, editor_id = post.author_id, "Post updated");
    Ok(redirect(&format!("/requested_post/{}", post.id)))
}

/// GET /delete_post/{post_id}
///
/// Hard delete. Comments on the post are kept and keep pointing at the
/// deleted id.
pub async fn delete_post(
    state: web::Data<AppState>,
    allowed: Allowed<can::DeletePost>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = fetch_post(&state, path.into_inner()).await?;

    let orphaned = state.comments.find_by_post_id(post.id).await?.len();

    state.posts.delete(post.id).await?;

    if orphaned > 0 {
        tracing::warn!(post_id = post.id, orphaned, "Deleted post left comments behind");
    }
    tracing::info!(
        post_id = post.id,
        admin_id = allowed.identity.user_id,
        "Post deleted"
    );
    Ok(redirect("/get_all_blog_posts"))
}
