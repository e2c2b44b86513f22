//! Repository implementations over in-memory tables.

use async_trait::async_trait;

use folio_core::domain::{Comment, Post, User};
use folio_core::error::RepoError;
use folio_core::ports::{BaseRepository, CommentRepository, PostRepository, UserRepository};

use super::table::Table;
use crate::mask_email;

pub struct InMemoryUserRepository {
    table: Table<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("users"),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, i32> for InMemoryUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        self.table.save(user).await
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.table.delete(id).await
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");
        Ok(self.table.find(|u| u.email == email).await)
    }
}

pub struct InMemoryPostRepository {
    table: Table<Post>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("posts"),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.table.save(post).await
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.table.delete(id).await
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.table.filter(|_| true).await)
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.table.filter(|_| true).await;
        posts.reverse();
        Ok(posts)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Post>, RepoError> {
        Ok(self.table.find(|p| p.title == title).await)
    }
}

pub struct InMemoryCommentRepository {
    table: Table<Comment>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new("comments"),
        }
    }
}

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Comment, i32> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn save(&self, comment: Comment) -> Result<Comment, RepoError> {
        self.table.save(comment).await
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.table.delete(id).await
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        Ok(self.table.filter(|c| c.post_id == post_id).await)
    }
}

#[cfg(test)]
mod tests {
    use folio_core::domain::PostDraft;

    use super::*;

    fn post(title: &str) -> Post {
        Post::new(
            1,
            PostDraft {
                title: title.to_string(),
                subtitle: "sub".to_string(),
                img_url: "https://img.example/p.jpg".to_string(),
                body: "body".to_string(),
            },
            chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increment() {
        let repo = InMemoryUserRepository::new();

        let first = repo
            .save(User::new("a@x.io".into(), "A".into(), "h".into()))
            .await
            .unwrap();
        let second = repo
            .save(User::new("b@x.io".into(), "B".into(), "h".into()))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_constraint_violation() {
        let repo = InMemoryUserRepository::new();
        repo.save(User::new("a@x.io".into(), "A".into(), "h".into()))
            .await
            .unwrap();

        let result = repo
            .save(User::new("a@x.io".into(), "Other".into(), "h".into()))
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.find_by_id(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_post_update_keeps_own_title() {
        let repo = InMemoryPostRepository::new();
        let mut saved = repo.save(post("Dawn")).await.unwrap();

        saved.body = "edited".to_string();
        let updated = repo.save(saved).await.unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(repo.find_by_title("Dawn").await.unwrap().unwrap().body, "edited");
    }

    #[tokio::test]
    async fn test_update_to_taken_title_is_rejected() {
        let repo = InMemoryPostRepository::new();
        repo.save(post("Dawn")).await.unwrap();
        let mut dusk = repo.save(post("Dusk")).await.unwrap();

        dusk.title = "Dawn".to_string();
        let result = repo.save(dusk).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_list_orders() {
        let repo = InMemoryPostRepository::new();
        for title in ["one", "two", "three"] {
            repo.save(post(title)).await.unwrap();
        }

        let oldest: Vec<_> = repo.list().await.unwrap().into_iter().map(|p| p.id).collect();
        let newest: Vec<_> = repo
            .list_newest_first()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(oldest, vec![1, 2, 3]);
        assert_eq!(newest, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let repo = InMemoryPostRepository::new();
        repo.save(post("one")).await.unwrap();
        repo.delete(1).await.unwrap();

        let next = repo.save(post("two")).await.unwrap();

        assert_eq!(next.id, 2);
        assert!(matches!(repo.delete(1).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_comments_filtered_by_post() {
        let repo = InMemoryCommentRepository::new();
        repo.save(Comment::new(1, 1, "first".into())).await.unwrap();
        repo.save(Comment::new(2, 2, "elsewhere".into())).await.unwrap();
        repo.save(Comment::new(2, 1, "second".into())).await.unwrap();

        let texts: Vec<_> = repo
            .find_by_post_id(1)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();

        assert_eq!(texts, vec!["first", "second"]);
    }
}
