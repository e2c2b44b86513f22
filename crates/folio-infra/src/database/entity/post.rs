//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub img_url: String,
    #[sea_orm(unique)]
    pub title: String,
    pub subtitle: String,
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub author_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            subtitle: model.subtitle,
            img_url: model.img_url,
            date: model.date,
            body: model.body,
        }
    }
}

impl From<folio_core::domain::Post> for ActiveModel {
    fn from(post: folio_core::domain::Post) -> Self {
        Self {
            id: if post.is_new() { NotSet } else { Set(post.id) },
            img_url: Set(post.img_url),
            title: Set(post.title),
            subtitle: Set(post.subtitle),
            date: Set(post.date),
            body: Set(post.body),
            author_id: Set(post.author_id),
        }
    }
}
