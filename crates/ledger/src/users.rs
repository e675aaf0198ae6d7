//! Users table and the public `User` view.
//!
//! The ledger stores entry ownership by `user_id`, which is the username.
//! The stored password hash never leaves this crate.

use sea_orm::entity::prelude::*;

/// An authenticated identity, without credential material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub username: String,
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            username: model.username,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entry::Entity")]
    Entries,
}

impl Related<super::entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
