//! HTTP handlers and route configuration.

mod auth;
mod comments;
mod pages;
mod posts;


use std::collections::HashMap;

use actix_web::web;

use folio_core::DomainError;
use folio_core::domain::{Comment, Post};
use folio_shared::view::{CommentView, PostDetail, PostSummary};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    // Public pages
    .route("/", web::get().to(pages::index))
    .route("/about", web::get().to(pages::about))
    .route("/footer", web::get().to(pages::footer))
    .service(
        web::resource("/contact")
            .route(web::get().to(pages::contact))
            .route(web::post().to(pages::contact)),
    )
    .route("/get_all_blog_posts", web::get().to(pages::all_posts))
    // Posts and comments
    .service(
        web::resource("/requested_post/{post_id}")
            .route(web::get().to(posts::show_post))
            .route(web::post().to(comments::add_comment)),
    )
    .service(
        web::resource("/new-post")
            .route(web::get().to(posts::new_post_form))
            .route(web::post().to(posts::create_post)),
    )
    .service(
        web::resource("/edit_post/{post_id}")
            .route(web::get().to(posts::edit_post_form))
            .route(web::post().to(posts::update_post)),
    )
    .route("/delete_post/{post_id}", web::get().to(posts::delete_post))
    .route(
        "/delete_comment/{comment_id}",
        web::get().to(comments::delete_comment),
    )
    // Accounts
    .service(
        web::resource("/register")
            .route(web::get().to(auth::register_form))
            .route(web::post().to(auth::register)),
    )
    .service(
        web::resource("/login")
            .route(web::get().to(auth::login_form))
            .route(web::post().to(auth::login)),
    )
    .route("/logout", web::get().to(auth::logout));
}

/// Fetch-or-404 for posts.
async fn fetch_post(state: &AppState, post_id: i32) -> AppResult<Post> {
    state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Post", post_id).into())
}

/// Display names for the given user ids. Unknown ids are left out.
async fn author_names(
    state: &AppState,
    ids: impl IntoIterator<Item = i32>,
) -> AppResult<HashMap<i32, String>> {
    let mut names = HashMap::new();
    for id in ids {
        if names.contains_key(&id) {
            continue;
        }
        if let Some(user) = state.users.find_by_id(id).await? {
            names.insert(id, user.name);
        }
    }
    Ok(names)
}

async fn post_summaries(state: &AppState, posts: Vec<Post>) -> AppResult<Vec<PostSummary>> {
    let names = author_names(state, posts.iter().map(|p| p.author_id)).await?;

    Ok(posts
        .into_iter()
        .map(|p| PostSummary {
            author: names.get(&p.author_id).cloned(),
            id: p.id,
            title: p.title,
            subtitle: p.subtitle,
            img_url: p.img_url,
            date: p.date,
        })
        .collect())
}

/// The post page: the post, its author and its comments.
async fn post_detail(state: &AppState, post: Post) -> AppResult<PostDetail> {
    let comments: Vec<Comment> = state.comments.find_by_post_id(post.id).await?;
    let names = author_names(
        state,
        std::iter::once(post.author_id).chain(comments.iter().map(|c| c.author_id)),
    )
    .await?;

    Ok(PostDetail {
        author: names.get(&post.author_id).cloned(),
        comments: comments
            .into_iter()
            .map(|c| CommentView {
                author: names.get(&c.author_id).cloned(),
                id: c.id,
                text: c.text,
            })
            .collect(),
        id: post.id,
        title: post.title,
        subtitle: post.subtitle,
        img_url: post.img_url,
        date: post.date,
        body: post.body,
    })
}
