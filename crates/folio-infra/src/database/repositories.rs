//! Repository implementations over SeaORM entities.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use folio_core::domain::{Comment, Post, User};
use folio_core::error::RepoError;
use folio_core::ports::{CommentRepository, PostRepository, UserRepository};

use super::base::{SeaOrmRepository, map_read_err};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use crate::mask_email;

pub type SeaOrmUserRepository = SeaOrmRepository<UserEntity>;

pub type SeaOrmPostRepository = SeaOrmRepository<PostEntity>;

pub type SeaOrmCommentRepository = SeaOrmRepository<CommentEntity>;

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_read_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_read_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_read_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(title, "Finding post by title");

        let result = PostEntity::find()
            .filter(post::Column::Title.eq(title))
            .one(&self.db)
            .await
            .map_err(map_read_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_read_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
