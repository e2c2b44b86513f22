use async_trait::async_trait;

use crate::domain::{Comment, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity. Unsaved entities are inserted and come back with
    /// their assigned id; saved ones are updated in place.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// All posts in insertion order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// All posts, highest id first.
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_title(&self, title: &str) -> Result<Option<Post>, RepoError>;
}

/// Comment repository.
///
/// Comments are not removed when their post is deleted, so
/// `find_by_post_id` may be called for a post id that no longer exists.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i32> {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;
}
