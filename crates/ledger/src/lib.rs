//! Core library for the finance tracker: user accounts, the entry store and
//! the dashboard aggregation, backed by sea-orm.
//!
//! The [`Ledger`] owns the database handle and is passed explicitly to every
//! caller; there is no process-global connection. Ownership of entries is
//! checked here, on every identifier-addressed operation, before any
//! mutation touches the store.

use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

pub use entry::{Entry, EntryDraft, EntryKind, parse_date};
pub use error::LedgerError;
pub use money::MoneyCents;
pub use summary::{CategoryTotal, Summary, summarize};
pub use users::User;

mod credentials;
pub mod entry;
mod error;
mod money;
mod summary;
pub mod users;

type ResultLedger<T> = Result<T, LedgerError>;

#[derive(Debug)]
pub struct Ledger {
    database: DatabaseConnection,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    // ── Credential store ────────────────────────────────────────────────

    /// Create a new account.
    ///
    /// Stores an Argon2id hash of the password, never the raw value. Fails
    /// with [`LedgerError::DuplicateUsername`] when the username is taken;
    /// the existing account is left untouched.
    pub async fn register(&self, username: &str, password: &str) -> ResultLedger<User> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(LedgerError::InvalidCredentials);
        }

        if users::Entity::find_by_id(username)
            .one(&self.database)
            .await?
            .is_some()
        {
            return Err(LedgerError::DuplicateUsername(username.to_string()));
        }

        let model = users::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(credentials::hash_password(password)?),
        };
        Ok(model.insert(&self.database).await?.into())
    }

    /// Validate a login attempt.
    ///
    /// Unknown user and wrong password both fail with
    /// [`LedgerError::InvalidCredentials`]; callers cannot probe for account
    /// existence.
    pub async fn authenticate(&self, username: &str, password: &str) -> ResultLedger<User> {
        let user = users::Entity::find_by_id(username.trim())
            .one(&self.database)
            .await?;

        match user {
            Some(model) if credentials::verify_password(password, &model.password_hash) => {
                Ok(model.into())
            }
            _ => Err(LedgerError::InvalidCredentials),
        }
    }

    // ── Entry store ─────────────────────────────────────────────────────

    /// Record a new entry for `owner`, assigning a fresh id.
    pub async fn add_entry(&self, owner: &str, draft: EntryDraft) -> ResultLedger<Entry> {
        Self::validate_draft(&draft)?;

        let entry = Entry::new(owner.to_string(), draft);
        entry::ActiveModel::from(&entry).insert(&self.database).await?;
        Ok(entry)
    }

    /// All entries owned by `owner`, in unspecified order.
    pub async fn entries(&self, owner: &str) -> ResultLedger<Vec<Entry>> {
        let models = entry::Entity::find()
            .filter(entry::Column::UserId.eq(owner))
            .all(&self.database)
            .await?;

        models.into_iter().map(Entry::try_from).collect()
    }

    /// All entries owned by `owner`, newest date first.
    pub async fn entries_by_date_desc(&self, owner: &str) -> ResultLedger<Vec<Entry>> {
        let models = entry::Entity::find()
            .filter(entry::Column::UserId.eq(owner))
            .order_by_desc(entry::Column::Date)
            .all(&self.database)
            .await?;

        models.into_iter().map(Entry::try_from).collect()
    }

    /// Return a single entry, gated by ownership.
    pub async fn entry(&self, id: Uuid, owner: &str) -> ResultLedger<Entry> {
        self.owned_entry(id, owner).await?.try_into()
    }

    /// Replace the mutable fields of an entry, gated by ownership.
    ///
    /// The owner itself is immutable after creation.
    pub async fn update_entry(
        &self,
        id: Uuid,
        owner: &str,
        draft: EntryDraft,
    ) -> ResultLedger<Entry> {
        Self::validate_draft(&draft)?;
        let current = self.owned_entry(id, owner).await?;

        let model = entry::ActiveModel {
            id: ActiveValue::Set(current.id),
            title: ActiveValue::Set(draft.title.clone()),
            amount_cents: ActiveValue::Set(draft.amount.cents()),
            category: ActiveValue::Set(draft.category.clone()),
            kind: ActiveValue::Set(draft.kind.as_str().to_string()),
            date: ActiveValue::Set(draft.date),
            user_id: ActiveValue::NotSet,
        };
        model.update(&self.database).await?;

        Ok(Entry {
            id,
            user_id: current.user_id,
            title: draft.title,
            amount: draft.amount,
            category: draft.category,
            kind: draft.kind,
            date: draft.date,
        })
    }

    /// Remove an entry, gated by ownership.
    pub async fn delete_entry(&self, id: Uuid, owner: &str) -> ResultLedger<()> {
        let current = self.owned_entry(id, owner).await?;
        entry::Entity::delete_by_id(current.id)
            .exec(&self.database)
            .await?;
        Ok(())
    }

    // ── Aggregation ─────────────────────────────────────────────────────

    /// Load `owner`'s entries and the aggregate totals over them.
    pub async fn dashboard(&self, owner: &str) -> ResultLedger<(Vec<Entry>, Summary)> {
        let entries = self.entries(owner).await?;
        let summary = summarize(&entries);
        Ok((entries, summary))
    }

    // ── Internal ────────────────────────────────────────────────────────

    /// Resolve an entry id, then check ownership: absent id is
    /// [`LedgerError::EntryNotFound`], foreign owner is
    /// [`LedgerError::Unauthorized`]. Every identifier-addressed operation
    /// goes through here before touching the row.
    async fn owned_entry(&self, id: Uuid, owner: &str) -> ResultLedger<entry::Model> {
        let model = entry::Entity::find_by_id(id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| LedgerError::EntryNotFound(id.to_string()))?;

        if model.user_id != owner {
            return Err(LedgerError::Unauthorized(id.to_string()));
        }
        Ok(model)
    }

    fn validate_draft(draft: &EntryDraft) -> ResultLedger<()> {
        if draft.amount.is_negative() {
            return Err(LedgerError::InvalidAmount(
                "amount must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// The builder for `Ledger`
#[derive(Default)]
pub struct LedgerBuilder {
    database: DatabaseConnection,
}

impl LedgerBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> LedgerBuilder {
        self.database = db;
        self
    }

    /// Construct `Ledger`
    pub fn build(self) -> Ledger {
        Ledger {
            database: self.database,
        }
    }
}
