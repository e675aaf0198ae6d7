//! The module contains the `Entry` type representing a single income or
//! expense record, together with its `entries` table entity.

use core::fmt;

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{LedgerError, MoneyCents, ResultLedger};

/// Discriminator for an [`Entry`]: money coming in or going out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for EntryKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidKind(other.to_string())),
        }
    }
}

/// A single income or expense record, owned by exactly one user.
///
/// The owner is fixed at creation; every other field is mutable through
/// [`Ledger::update_entry`].
///
/// [`Ledger::update_entry`]: crate::Ledger::update_entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub amount: MoneyCents,
    pub category: String,
    pub kind: EntryKind,
    /// Calendar day, no time component.
    pub date: NaiveDate,
}

impl Entry {
    pub(crate) fn new(user_id: String, draft: EntryDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: draft.title,
            amount: draft.amount,
            category: draft.category,
            kind: draft.kind,
            date: draft.date,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.amount, self.title, self.category
        )
    }
}

/// The mutable fields of an entry, grouped to keep call sites readable.
#[derive(Clone, Debug)]
pub struct EntryDraft {
    pub title: String,
    pub amount: MoneyCents,
    pub category: String,
    pub kind: EntryKind,
    pub date: NaiveDate,
}

/// Parse a `YYYY-MM-DD` calendar day from user input.
pub fn parse_date(value: &str) -> ResultLedger<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(value.to_string()))
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub amount_cents: i64,
    pub category: String,
    pub kind: String,
    pub date: Date,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Username",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Entry> for ActiveModel {
    fn from(entry: &Entry) -> Self {
        Self {
            id: ActiveValue::Set(entry.id.to_string()),
            title: ActiveValue::Set(entry.title.clone()),
            amount_cents: ActiveValue::Set(entry.amount.cents()),
            category: ActiveValue::Set(entry.category.clone()),
            kind: ActiveValue::Set(entry.kind.as_str().to_string()),
            date: ActiveValue::Set(entry.date),
            user_id: ActiveValue::Set(entry.user_id.clone()),
        }
    }
}

impl TryFrom<Model> for Entry {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| LedgerError::EntryNotFound(model.id.clone()))?,
            user_id: model.user_id,
            title: model.title,
            amount: MoneyCents::new(model.amount_cents),
            category: model.category,
            kind: EntryKind::try_from(model.kind.as_str())?,
            date: model.date,
        })
    }
}
